pub mod gnuplot;
pub mod writer;
