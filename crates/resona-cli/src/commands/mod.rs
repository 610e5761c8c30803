//! CLI command implementations

pub mod generate;
pub mod presets;

use resona_backend_audio::AudioError;
use resona_spec::SpecError;

/// Stable configuration error code (e.g. "E002") found anywhere in an
/// error chain.
pub fn error_code(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(spec) = cause.downcast_ref::<SpecError>() {
            return Some(spec.code().code());
        }
        match cause.downcast_ref::<AudioError>() {
            Some(AudioError::Spec(spec)) => Some(spec.code().code()),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_code_through_context() {
        let err = Err::<(), _>(AudioError::Spec(SpecError::missing("silent", "text")))
            .context("Failed to generate silent")
            .unwrap_err();
        assert_eq!(error_code(&err), Some("E002"));

        let plain = anyhow::anyhow!("disk full");
        assert_eq!(error_code(&plain), None);
    }
}
