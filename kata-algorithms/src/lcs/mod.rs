pub mod bottom_up;
