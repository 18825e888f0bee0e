//! Metadata Provider Implementations
//!
//! | Provider | Source |
//! |----------|--------|
//! | [`ComicInfoProvider`] | `ComicInfo.xml` at any depth |
//! | [`NfoProvider`] | `*.nfo` |

pub mod comic_info;
pub mod nfo;

pub use comic_info::ComicInfoProvider;
pub use nfo::NfoProvider;

use fmtreg_domain::ports::MetadataProvider;

pub(crate) fn validate(provider: &(dyn MetadataProvider + 'static)) -> bool {
    provider.is_valid()
}
