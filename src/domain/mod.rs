pub mod corpus;
pub mod dispatch;
pub mod stats;
pub mod synthesis;
