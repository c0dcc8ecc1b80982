use crate::builder::CorrelationReport;

/// Draws a correlation report somewhere: a terminal, a file, a test buffer.
///
/// The report carries the matrix and the subset label; the renderer decides
/// how to present them.
pub trait MatrixRenderer {
    type Error;

    fn render(&mut self, report: &CorrelationReport) -> Result<(), Self::Error>;
}

impl<R: MatrixRenderer + ?Sized> MatrixRenderer for &mut R {
    type Error = R::Error;

    fn render(&mut self, report: &CorrelationReport) -> Result<(), Self::Error> {
        (**self).render(report)
    }
}
