mod consultation;
mod estimate;
mod failures;
mod pages;
