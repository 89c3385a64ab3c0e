// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command-line front end.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::PixelwerkError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must change an input or a setting.
    ActionRequired,
    /// Cannot be fixed by the user: damaged file, unsupported format.
    Permanent,
    /// A defect in the program itself.
    Internal,
}

impl Severity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Permanent => 1,
            Self::ActionRequired => 2,
            // EX_SOFTWARE from sysexits.h
            Self::Internal => 70,
        }
    }
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// How the user should treat the failure; decides the exit status.
    pub severity: Severity,
}

/// Convert a `PixelwerkError` into a `HumanError`.
pub fn humanize_error(err: &PixelwerkError) -> HumanError {
    match err {
        PixelwerkError::IndexOutOfBounds { .. } | PixelwerkError::BufferLength { .. } => {
            HumanError {
                message: "Pixelwerk hit an internal error while processing the image.".into(),
                suggestion: format!("Please report this problem. ({err})"),
                severity: Severity::Internal,
            }
        }

        PixelwerkError::InvalidDimensions { .. } => HumanError {
            message: "The image has no pixels.".into(),
            suggestion: "Choose an image that is at least one pixel wide and tall.".into(),
            severity: Severity::Permanent,
        },

        PixelwerkError::InvalidKernel(detail) => HumanError {
            message: "The sharpening kernel in your settings is not usable.".into(),
            suggestion: format!(
                "The kernel must be a square grid with an odd number of rows, such as 3x3. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        PixelwerkError::KernelTooLarge { width, height, .. } => HumanError {
            message: "The image is too small to sharpen with this kernel.".into(),
            suggestion: format!(
                "Use a smaller kernel or a larger image. (Image size: {width}x{height})"
            ),
            severity: Severity::ActionRequired,
        },

        PixelwerkError::Decode(_) => HumanError {
            message: "This image couldn't be opened.".into(),
            suggestion: "The image may be damaged or in an unusual format. Try saving it as a JPEG or PNG first.".into(),
            severity: Severity::Permanent,
        },

        PixelwerkError::Encode(_) => HumanError {
            message: "The enhanced image couldn't be written in the chosen format.".into(),
            suggestion: "Try a different output format, such as PNG.".into(),
            severity: Severity::Permanent,
        },

        PixelwerkError::Config(detail) => HumanError {
            message: "Your settings file has a problem.".into(),
            suggestion: format!("Fix the setting and try again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        PixelwerkError::Serialization(_) => HumanError {
            message: "Your settings file couldn't be read.".into(),
            suggestion: "Check that the file is valid JSON, or create a fresh one with `pixelwerk init-config`.".into(),
            severity: Severity::ActionRequired,
        },

        PixelwerkError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::NotFound {
                HumanError {
                    message: "The file couldn't be found.".into(),
                    suggestion: "Check the path and try again.".into(),
                    severity: Severity::ActionRequired,
                }
            } else if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "Pixelwerk doesn't have permission to use that file.".into(),
                    suggestion: "Check the file permissions, or choose a different location.".into(),
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem reading or writing a file.".into(),
                    suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                    severity: Severity::Permanent,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_kernel_is_action_required() {
        let err = PixelwerkError::InvalidKernel("side length 2 is even".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("side length 2 is even"));
    }

    #[test]
    fn out_of_bounds_is_internal() {
        let err = PixelwerkError::IndexOutOfBounds {
            x: 9,
            y: 0,
            channel: 0,
            width: 4,
            height: 4,
        };
        assert_eq!(humanize_error(&err).severity, Severity::Internal);
    }

    #[test]
    fn exit_codes_differ_per_severity() {
        assert_eq!(Severity::Permanent.exit_code(), 1);
        assert_eq!(Severity::ActionRequired.exit_code(), 2);
        assert_eq!(Severity::Internal.exit_code(), 70);
        let human = humanize_error(&PixelwerkError::KernelTooLarge {
            radius: 1,
            width: 2,
            height: 2,
        });
        assert_eq!(human.severity.exit_code(), 2);
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = PixelwerkError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn decode_failure_is_permanent() {
        let err = PixelwerkError::Decode("unexpected EOF".into());
        assert_eq!(humanize_error(&err).severity, Severity::Permanent);
    }
}
