// Sync layer - the local-first view-model machinery
//
// Every screen follows the same shape: a live list fed by store pushes and
// a form flow moving between idle, editing, and submitting. The types here
// are headless so the same rules hold for any entity and any client; the
// store's own write ordering (document revisions) settles concurrent edits.

pub mod form_flow;
pub mod live_list;

pub use form_flow::{DeleteConfirmation, FlowError, FormFlow, FormState};
pub use live_list::LiveList;
