//! Python bindings for window selection

use pyo3::prelude::*;
use crate::window::Window;

/// Window type enum exposed to Python
#[pyclass(name = "Window")]
#[derive(Clone)]
pub enum PyWindow {
    Rectangular,
    Triangle,
    Hamming,
    Hanning,
    Blackman,
    BlackmanHarris,
}

impl From<PyWindow> for Window {
    fn from(py_win: PyWindow) -> Self {
        match py_win {
            PyWindow::Rectangular => Window::Rectangular,
            PyWindow::Triangle => Window::Triangle,
            PyWindow::Hamming => Window::Hamming,
            PyWindow::Hanning => Window::Hanning,
            PyWindow::Blackman => Window::Blackman,
            PyWindow::BlackmanHarris => Window::BlackmanHarris,
        }
    }
}
