mod overview;
pub use overview::TreatmentOverview;

mod history;
pub use history::WeekHistory;
