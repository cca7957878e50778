/// Representation used for clause and atom activity.
pub type Activity = f64;
