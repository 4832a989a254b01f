//! In-memory project catalogue and the listing/report queries over it.
//!
//! DESIGN
//! ======
//! The catalogue is seeded once per session and only admin review changes it.
//! Every query is a filter over the seed vector, so result order is always
//! catalogue order.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use serde::{Deserialize, Serialize};

use crate::types::{Role, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Approved,
    Funded,
    Rejected,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "قيد المراجعة",
            ProjectStatus::Approved => "متاح للتمويل",
            ProjectStatus::Funded => "مكتمل التمويل",
            ProjectStatus::Rejected => "مرفوض",
        }
    }

    /// Listed on the public home page.
    #[must_use]
    pub fn is_public(self) -> bool {
        matches!(self, ProjectStatus::Approved | ProjectStatus::Funded)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pledge {
    pub sponsor_email: String,
    /// Whole Saudi riyals.
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub owner_email: String,
    pub status: ProjectStatus,
    pub funding_goal: u64,
    pub pledges: Vec<Pledge>,
}

impl Project {
    #[must_use]
    pub fn raised(&self) -> u64 {
        self.pledges.iter().map(|p| p.amount).sum()
    }

    /// Funding progress as a whole percentage, capped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.funding_goal == 0 {
            return 100;
        }
        let pct = self.raised().saturating_mul(100) / self.funding_goal;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }

    #[must_use]
    pub fn pledged_by(&self, email: &str) -> u64 {
        self.pledges
            .iter()
            .filter(|p| p.sponsor_email == email)
            .map(|p| p.amount)
            .sum()
    }
}

/// Home-page search criteria. Empty fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub query: String,
    pub category: Option<String>,
}

impl ProjectFilter {
    #[must_use]
    pub fn accepts(&self, project: &Project) -> bool {
        if let Some(category) = &self.category {
            if &project.category != category {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || project.title.to_lowercase().contains(&query)
            || project.summary.to_lowercase().contains(&query)
    }
}

/// One pledge viewed as an agreement between a sponsor and a project owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contract {
    pub project_id: String,
    pub project_title: String,
    pub owner_email: String,
    pub sponsor_email: String,
    pub amount: u64,
}

/// Aggregate figures for the admin dashboard and reports page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogueSummary {
    pub pending: usize,
    pub approved: usize,
    pub funded: usize,
    pub rejected: usize,
    pub total_goal: u64,
    pub total_raised: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("المشروع غير موجود: {0}")]
    NotFound(String),
    #[error("المشروع {0} ليس قيد المراجعة")]
    NotPending(String),
    #[error("حالة المراجعة غير صالحة: {0:?}")]
    InvalidDecision(ProjectStatus),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProjectStore {
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_projects())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Approved and funded projects.
    #[must_use]
    pub fn public_listing(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.status.is_public()).collect()
    }

    #[must_use]
    pub fn filter(&self, filter: &ProjectFilter) -> Vec<&Project> {
        self.public_listing().into_iter().filter(|p| filter.accepts(p)).collect()
    }

    #[must_use]
    pub fn owned_by(&self, email: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.owner_email == email).collect()
    }

    #[must_use]
    pub fn backed_by(&self, email: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.pledged_by(email) > 0).collect()
    }

    #[must_use]
    pub fn pending(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Pending)
            .collect()
    }

    /// Distinct categories in catalogue order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for project in &self.projects {
            if !out.contains(&project.category) {
                out.push(project.category.clone());
            }
        }
        out
    }

    /// Record an admin review decision. Only pending projects can be reviewed,
    /// and the decision is either approval or rejection.
    ///
    /// # Errors
    ///
    /// `InvalidDecision` when `status` is not `Approved` or `Rejected`,
    /// `NotFound` when no project has `id`, `NotPending` when the project was
    /// already reviewed.
    pub fn set_status(&mut self, id: &str, status: ProjectStatus) -> Result<(), ProjectError> {
        if !matches!(status, ProjectStatus::Approved | ProjectStatus::Rejected) {
            return Err(ProjectError::InvalidDecision(status));
        }
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProjectError::NotFound(id.to_owned()))?;
        if project.status != ProjectStatus::Pending {
            return Err(ProjectError::NotPending(id.to_owned()));
        }
        log::info!("project {id} moved from {:?} to {status:?}", project.status);
        project.status = status;
        Ok(())
    }

    /// Pledges visible to `user`: owners see pledges on their projects,
    /// sponsors see their own, admins see all.
    #[must_use]
    pub fn contracts_for(&self, user: &User) -> Vec<Contract> {
        let mut out = Vec::new();
        for project in &self.projects {
            for pledge in &project.pledges {
                let visible = match user.role {
                    Role::Startup => project.owner_email == user.email,
                    Role::Sponsor => pledge.sponsor_email == user.email,
                    Role::Admin => true,
                    Role::Public => false,
                };
                if visible {
                    out.push(Contract {
                        project_id: project.id.clone(),
                        project_title: project.title.clone(),
                        owner_email: project.owner_email.clone(),
                        sponsor_email: pledge.sponsor_email.clone(),
                        amount: pledge.amount,
                    });
                }
            }
        }
        out
    }

    #[must_use]
    pub fn summary(&self) -> CatalogueSummary {
        let mut summary = CatalogueSummary::default();
        for project in &self.projects {
            match project.status {
                ProjectStatus::Pending => summary.pending += 1,
                ProjectStatus::Approved => summary.approved += 1,
                ProjectStatus::Funded => summary.funded += 1,
                ProjectStatus::Rejected => summary.rejected += 1,
            }
            summary.total_goal += project.funding_goal;
            summary.total_raised += project.raised();
        }
        summary
    }

    /// Raised amount per category, in category order.
    #[must_use]
    pub fn category_totals(&self) -> Vec<(String, u64)> {
        self.categories()
            .into_iter()
            .map(|category| {
                let total = self
                    .projects
                    .iter()
                    .filter(|p| p.category == category)
                    .map(Project::raised)
                    .sum();
                (category, total)
            })
            .collect()
    }
}

fn pledge(sponsor_email: &str, amount: u64) -> Pledge {
    Pledge { sponsor_email: sponsor_email.to_owned(), amount }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    summary: &str,
    category: &str,
    owner_email: &str,
    status: ProjectStatus,
    funding_goal: u64,
    pledges: Vec<Pledge>,
) -> Project {
    Project {
        id: id.to_owned(),
        title: title.to_owned(),
        summary: summary.to_owned(),
        category: category.to_owned(),
        owner_email: owner_email.to_owned(),
        status,
        funding_goal,
        pledges,
    }
}

fn seed_projects() -> Vec<Project> {
    const STARTUP: &str = "startup@example.com";
    const SPONSOR: &str = "sponsor@example.com";
    vec![
        project(
            "1",
            "منصة تعليم البرمجة للأطفال",
            "دروس تفاعلية بالعربية لتعليم أساسيات البرمجة للأعمار من 8 إلى 14 سنة.",
            "تعليم",
            STARTUP,
            ProjectStatus::Approved,
            150_000,
            vec![pledge(SPONSOR, 40_000), pledge("fund@example.com", 25_000)],
        ),
        project(
            "2",
            "تطبيق حجز العيادات",
            "حجز المواعيد الطبية ومتابعة الوصفات من تطبيق واحد.",
            "صحة",
            "clinic@example.com",
            ProjectStatus::Funded,
            200_000,
            vec![pledge(SPONSOR, 120_000), pledge("angel@example.com", 80_000)],
        ),
        project(
            "3",
            "مزارع مائية ذكية",
            "زراعة بدون تربة تعتمد على حساسات لمراقبة المياه والإضاءة.",
            "زراعة",
            STARTUP,
            ProjectStatus::Pending,
            300_000,
            Vec::new(),
        ),
        project(
            "4",
            "سوق الحرفيين الإلكتروني",
            "متجر يجمع الحرفيين المحليين ويوفر الشحن والدفع الإلكتروني.",
            "تجارة إلكترونية",
            "crafts@example.com",
            ProjectStatus::Approved,
            90_000,
            vec![pledge("angel@example.com", 15_000)],
        ),
        project(
            "5",
            "محفظة الطاقة الشمسية المنزلية",
            "تمويل جماعي لألواح شمسية للمنازل مع سداد شهري من وفر الفاتورة.",
            "طاقة",
            "solar@example.com",
            ProjectStatus::Pending,
            500_000,
            Vec::new(),
        ),
        project(
            "6",
            "تطبيق توصيل الوجبات الصحية",
            "اشتراكات أسبوعية لوجبات صحية محسوبة السعرات.",
            "صحة",
            "meals@example.com",
            ProjectStatus::Rejected,
            120_000,
            Vec::new(),
        ),
    ]
}
