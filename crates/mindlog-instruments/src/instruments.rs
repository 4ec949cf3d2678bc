pub mod big_five;
pub mod gad7;
pub mod phq9;
pub mod pss10;
