//! Taproom Core - form validation and page behaviour for the beer-review site
//!
//! This crate holds the logic behind the site's account forms and the small
//! widgets around reviews, independent of any DOM.
//!
//! # Main Components
//!
//! - **Validation**: password strength, email format, password confirmation
//!   and required-field gating, driven by field events
//! - **Page**: like button, share links, toasts, rating stars, newsletter stub
//! - **Scenario**: replay of a recorded form session
//! - **HTTP**: the like-toggle client (behind the `http` feature)
//! - **Error Handling**: error types using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use taproom_core::{FieldEvent, Form, Field, FieldKind, FormValidator, Result};
//!
//! fn example() -> Result<()> {
//!     let form = Form::new(vec![
//!         Field::new("email", FieldKind::Email).required(),
//!         Field::new("password1", FieldKind::Password).required(),
//!     ]);
//!     let mut validator = FormValidator::new(form);
//!     validator.dispatch(FieldEvent::input("password1", "Str0ng!pass"))?;
//!     let outcome = validator.submit();
//!     assert!(outcome.is_blocked());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod types;
pub mod validation;
pub mod page;
pub mod scenario;
#[cfg(feature = "http")]
pub mod http;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use types::{Field, FieldKind, Form};
pub use validation::{
    calculate_password_strength, validate_email, validate_password_confirmation,
    validate_password_strength, validate_required,
    // Verdicts and annotations
    CheckCategory, FeedbackAnnotation, FeedbackBoard, FieldState, PasswordStrengthResult,
    StrengthLevel, ValidationVerdict, VerdictLevel,
    // Event wiring
    Check, FieldEvent, FormBinding, Trigger,
    // Dispatch
    DispatchOutcome, FormValidator, SubmissionOutcome,
};
pub use scenario::{FieldReport, Scenario, ScenarioReport};
pub use page::{LikeButton, LikeResponse, ShareTarget, Toast, ToastKind};

#[cfg(feature = "http")]
pub use http::{SiteClient, SiteConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
