use crate::utils::error::{QsmError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(QsmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(QsmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QsmError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| QsmError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_dir", Path::new("/data/swi_coils")).is_ok());
        assert!(validate_path("input_dir", Path::new("relative/dir")).is_ok());
        assert!(validate_path("input_dir", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("matlab_executable", "matlab").is_ok());
        assert!(validate_non_empty_string("matlab_executable", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present: Option<PathBuf> = Some(PathBuf::from("/data/mask.nii.gz"));
        let absent: Option<PathBuf> = None;
        assert!(validate_required_field("mask_file", &present).is_ok());
        assert!(validate_required_field("mask_file", &absent).is_err());
    }
}
