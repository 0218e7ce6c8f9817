use crate::foundation::error::{PlanError, PlanResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Fixed per-category amounts for a small animated short, in whole currency units.
///
/// Amounts do not scale with shot count or duration; a larger project supplies its own
/// template through configuration.
pub struct BudgetTemplate {
    /// Concept art, storyboard, previz.
    pub pre_production: u64,
    /// Animation, lighting, rendering.
    pub production: u64,
    /// Editing, grading, sound mix.
    pub post_production: u64,
    /// Equipment rental.
    pub equipment: u64,
    /// Licenses and plugins.
    pub software: u64,
}

impl Default for BudgetTemplate {
    fn default() -> Self {
        Self {
            pre_production: 2_500,
            production: 8_000,
            post_production: 1_500,
            equipment: 1_200,
            software: 800,
        }
    }
}

impl BudgetTemplate {
    /// Reject templates whose categories would overflow when summed.
    pub fn validate(&self) -> PlanResult<()> {
        [
            self.production,
            self.post_production,
            self.equipment,
            self.software,
        ]
        .into_iter()
        .try_fold(self.pre_production, u64::checked_add)
        .map(|_| ())
        .ok_or_else(|| PlanError::config("budget template total overflows u64"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Budget breakdown whose `total` always equals the sum of its parts.
pub struct BudgetEstimate {
    pre_production: u64,
    production: u64,
    post_production: u64,
    equipment: u64,
    software: u64,
    total: u64,
}

impl BudgetEstimate {
    /// Build an estimate; `total` is derived here and nowhere else.
    pub fn new(
        pre_production: u64,
        production: u64,
        post_production: u64,
        equipment: u64,
        software: u64,
    ) -> Self {
        let total = pre_production
            .saturating_add(production)
            .saturating_add(post_production)
            .saturating_add(equipment)
            .saturating_add(software);
        Self {
            pre_production,
            production,
            post_production,
            equipment,
            software,
            total,
        }
    }

    /// Pre-production amount.
    pub fn pre_production(&self) -> u64 {
        self.pre_production
    }

    /// Production amount.
    pub fn production(&self) -> u64 {
        self.production
    }

    /// Post-production amount.
    pub fn post_production(&self) -> u64 {
        self.post_production
    }

    /// Equipment amount.
    pub fn equipment(&self) -> u64 {
        self.equipment
    }

    /// Software amount.
    pub fn software(&self) -> u64 {
        self.software
    }

    /// Sum of the five categories.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(label, amount)` rows in presentation order, total excluded.
    pub fn lines(&self) -> [(&'static str, u64); 5] {
        [
            ("Pre-production", self.pre_production),
            ("Production", self.production),
            ("Post-production", self.post_production),
            ("Equipment", self.equipment),
            ("Software", self.software),
        ]
    }
}

/// Estimate the project budget from a fixed template.
pub fn estimate_budget(template: &BudgetTemplate) -> BudgetEstimate {
    BudgetEstimate::new(
        template.pre_production,
        template.production,
        template.post_production,
        template.equipment,
        template.software,
    )
}
