use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to draw the kinship scatter plot: {0}")]
    Draw(String),

    #[error("Failed to write the kinship scatter plot into '{0}'")]
    Present(String),
}
