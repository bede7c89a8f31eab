// Presenter Port - renders views and record details
use crate::application::View;
use crate::domain::JobRecord;

/// Presentation adapter
///
/// Formatting is entirely the adapter's concern; the core only decides
/// what is shown and in which order.
pub trait Presenter {
    /// Render one summary line per record (title, type, level)
    fn render(&self, view: &View);

    /// Render every field of one record, posted time human-readable
    fn render_detail(&self, record: &JobRecord);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::cell::RefCell;

    /// Records what it was asked to render
    #[derive(Default)]
    pub struct RecordingPresenter {
        pub rendered: RefCell<Vec<Vec<String>>>,
        pub details: RefCell<Vec<String>>,
    }

    impl Presenter for RecordingPresenter {
        fn render(&self, view: &View) {
            self.rendered.borrow_mut().push(view.titles());
        }

        fn render_detail(&self, record: &JobRecord) {
            self.details.borrow_mut().push(record.title().to_string());
        }
    }
}
