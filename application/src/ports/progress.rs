//! Progress notification port
//!
//! Defines the interface for reporting progress during provisioning.

/// A provisioning step, in the order a full run executes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvisionStep {
    PathGroups,
    VenueGroup,
    RoleGroups,
    PaperGroups,
    Recruitment,
}

impl ProvisionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProvisionStep::PathGroups => "path_groups",
            ProvisionStep::VenueGroup => "venue_group",
            ProvisionStep::RoleGroups => "role_groups",
            ProvisionStep::PaperGroups => "paper_groups",
            ProvisionStep::Recruitment => "recruitment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProvisionStep::PathGroups => "Path groups",
            ProvisionStep::VenueGroup => "Venue group",
            ProvisionStep::RoleGroups => "Committee groups",
            ProvisionStep::PaperGroups => "Paper committee groups",
            ProvisionStep::Recruitment => "Recruitment groups",
        }
    }
}

impl std::fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Callback for progress updates during provisioning
///
/// Implementations live in the presentation layer. Every callback comes
/// from the task driving the use case, one submission at a time as paper
/// group workers finish.
pub trait ProvisionProgressNotifier: Send + Sync {
    /// Called when a step starts with the number of items it will process
    fn on_step_start(&self, step: ProvisionStep, total_items: usize);

    /// Called when one item (group or paper) of a step finishes
    fn on_item_complete(&self, step: ProvisionStep, item: &str, success: bool);

    /// Called when a step completes
    fn on_step_complete(&self, step: ProvisionStep);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProvisionProgressNotifier for NoProgress {
    fn on_step_start(&self, _step: ProvisionStep, _total_items: usize) {}
    fn on_item_complete(&self, _step: ProvisionStep, _item: &str, _success: bool) {}
    fn on_step_complete(&self, _step: ProvisionStep) {}
}
