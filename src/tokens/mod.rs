//! Portable path tokens.
//!
//! Absolute paths differ between hosts, so cached template paths are stored
//! with their root prefix replaced by a symbolic `{{NAME}}` marker and
//! expanded again against the roots of whichever host reads them.
//!
//! # Example
//!
//! ```
//! use wenprise_templates::tokens::{tokenize, untokenize, PathTokens};
//!
//! let build = PathTokens::new().with("WP_CONTENT_DIR", "/srv/www/wp-content");
//! let cached = tokenize("/srv/www/wp-content/themes/shop/single.php", &build);
//! assert_eq!(cached, "{{WP_CONTENT_DIR}}/themes/shop/single.php");
//!
//! let web = PathTokens::new().with("WP_CONTENT_DIR", "/var/www/html/wp-content");
//! assert_eq!(
//!     untokenize(&cached, &web),
//!     "/var/www/html/wp-content/themes/shop/single.php"
//! );
//! ```

pub mod codec;
pub mod roots;

pub use codec::{tokenize, unresolved_tokens, untokenize, PathToken, PathTokens};
pub use roots::{discover_path_tokens, RootPaths, ROOT_NAMES};
