// Feature extractors that pull structured signals out of raw resume text.

pub mod education;
pub mod experience;
pub mod skills;
