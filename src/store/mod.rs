pub mod import;
pub mod store;
pub mod submission;

pub use import::{import_batch, import_file, ImportSummary};
pub use store::{
    read_required_list, ApprovedStore, JsonApprovedStore, JsonListFile, JsonRejectionLog,
    MemoryList, RejectedRecord, RejectionLog, StoreError,
};
pub use submission::{submit, SubmitResult, Submission};
