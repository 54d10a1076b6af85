use enum_assoc::Assoc;
use smallvec::SmallVec;
use tracing::warn;

use crate::surface::SurfaceError;

/// Independent parts of applying a theme. A failure in one step never stops
/// the steps after it.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn label(&self) -> &'static str)]
pub enum RenderStep {
    #[assoc(label = "reset")]
    Reset,
    #[assoc(label = "track metadata")]
    Track,
    #[assoc(label = "vinyl artwork")]
    Artwork,
    #[assoc(label = "vinyl label")]
    Label,
    #[assoc(label = "background")]
    Background,
    #[assoc(label = "font")]
    Font,
    #[assoc(label = "corner decoration")]
    Corner,
    #[assoc(label = "widget background")]
    WidgetEffect,
    #[assoc(label = "palette")]
    Palette,
    #[assoc(label = "vinyl frame")]
    Frame,
}

/// Outcome of applying one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub theme_id: String,
    pub failed_steps: SmallVec<[RenderStep; 2]>,
}

impl ApplyReport {
    pub(crate) fn new(theme_id: impl Into<String>) -> Self {
        Self {
            theme_id: theme_id.into(),
            failed_steps: SmallVec::new(),
        }
    }

    /// Whether every step rendered.
    pub fn is_complete(&self) -> bool {
        self.failed_steps.is_empty()
    }

    pub fn failed(&self, step: RenderStep) -> bool {
        self.failed_steps.contains(&step)
    }

    pub(crate) fn record(&mut self, step: RenderStep, result: Result<(), SurfaceError>) {
        if let Err(err) = result {
            warn!(theme = %self.theme_id, step = step.label(), %err, "failed to apply theme step");
            self.failed_steps.push(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Slot;

    #[test]
    fn test_record() {
        let mut report = ApplyReport::new("GLUE");
        report.record(RenderStep::Track, Ok(()));
        assert!(report.is_complete());

        report.record(RenderStep::Corner, Err(SurfaceError::MissingSlot(Slot::Corner)));
        assert!(!report.is_complete());
        assert!(report.failed(RenderStep::Corner));
        assert!(!report.failed(RenderStep::Track));
    }
}
