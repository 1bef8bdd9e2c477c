use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    /// Neither the `[x, y]` array form nor the keyed `{"X", "Y"}` form
    /// matched. Carries the error of the keyed attempt, which runs last.
    #[error("failed to parse vector: {0}")]
    Parse(#[source] serde_json::Error),

    /// Not produced for `Vec2` today: serde_json writes non-finite floats
    /// as `null` instead of failing. Kept so the encoders can report
    /// serializer errors without panicking.
    #[error("failed to encode vector: {0}")]
    Encode(#[source] serde_json::Error),
}
