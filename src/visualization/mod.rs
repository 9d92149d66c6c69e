pub mod pendulum_plot;
pub mod pendulum_vis2d;
