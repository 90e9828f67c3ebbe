//! Random selection of phrases.

use rand::Rng;

use ssml_core::validate::rejected;
use ssml_core::{Result, SpeechError};

/// Pick one of `choices` uniformly at random using `rng`.
///
/// An empty slice has nothing to choose from and is rejected.
pub fn choose<'c, T, R>(choices: &'c [T], rng: &mut R) -> Result<&'c T>
where
    R: Rng + ?Sized,
{
    if choices.is_empty() {
        return Err(rejected(SpeechError::InvalidArgument(
            "The choices provided to Speech::say_random_choice(..) must be a non-empty list"
                .to_string(),
        )));
    }

    Ok(&choices[rng.random_range(0..choices.len())])
}
