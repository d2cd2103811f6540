mod model;
mod totals;

pub use model::{
    ClassResult, Exception, Group, GroupMethod, Groups, RawReport, STATUS_FAIL, STATUS_SKIP, Suite,
    TestBlock, TestRecord,
};
pub use totals::{FileReport, RunTotals};
