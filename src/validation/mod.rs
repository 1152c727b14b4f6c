/*!
 * Validation gate for incoming text.
 *
 * A text unit must pass two checks before detection or translation is
 * attempted:
 * - `words`: every whitespace-separated word stays within the configured
 *   length bounds
 * - `sentences`: the total word count and every `.`-delimited sentence stay
 *   within the configured word-count bounds, and at least one sentence is
 *   substantial enough to carry a detectable signal
 *
 * Both checks stop at the first violation and report a human-readable reason.
 */

pub mod rules;
pub mod text;

pub use rules::ValidationRule;
pub use text::{TextValidator, ValidationOutcome};
