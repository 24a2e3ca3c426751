mod consultant;

pub use consultant::{Consultant, ConsultantId, SalaryRecord};
