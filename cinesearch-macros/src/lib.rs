mod expand;

use proc_macro::TokenStream;

/**
 * Lifts every struct-like variant of an enum into a standalone struct of the same name and
 * replaces the variant with a one-field tuple variant wrapping that struct.
 *
 * The generated structs copy the enum's attributes and visibility, and their fields take the
 * enum's visibility so handlers can destructure them outside the defining module.
 *
 * Example:
 * ```ignore
 * #[expand]
 * #[derive(Clone, Debug)]
 * pub enum PageEvent {
 *     Click { target: String },
 *     Focus { target: String },
 * }
 * ```
 * generates
 * ```ignore
 * #[derive(Clone, Debug)]
 * pub struct Click {
 *     pub target: String,
 * }
 *
 * #[derive(Clone, Debug)]
 * pub struct Focus {
 *     pub target: String,
 * }
 *
 * #[derive(Clone, Debug)]
 * pub enum PageEvent {
 *     Click(Click),
 *     Focus(Focus),
 * }
 * ```
 * Unit and tuple variants are left untouched, and each lifted variant gains a `From` impl.
 */
#[proc_macro_attribute]
pub fn expand(_arg_tokens: TokenStream, item_tokens: TokenStream) -> TokenStream {
    crate::expand::expand(item_tokens)
}
