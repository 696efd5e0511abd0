pub mod achievement;
pub mod booking;
pub mod coach;
pub mod contact;
pub mod facility;
pub mod gallery;
pub mod program;
pub mod student;
pub mod testimonial;
