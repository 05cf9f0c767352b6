//! Query parameters for the bestiary search endpoint.

use url::Url;

/// Number of monsters requested per page.
pub const DEFAULT_BATCH_SIZE: u64 = 10;

/// Language selector sent with every request.
pub const DEFAULT_LANG: &str = "fr";

/// Number of zeroed `CS[]` category slots the search page always sends.
const CATEGORY_SLOTS: usize = 5;

/// One page request against the bestiary search endpoint.
///
/// The type selector is fixed to `all` and every category filter is left at
/// zero, which is what the site's own search page sends for "match everything".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterQuery {
    /// Language selector (`lang`). Defaults to `fr`.
    pub lang: String,
    /// Page size (`Q`). Defaults to [`DEFAULT_BATCH_SIZE`].
    pub batch_size: u64,
    /// Offset of the first monster on the page (`O`). Defaults to 0.
    pub offset: u64,
}

impl Default for MonsterQuery {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            offset: 0,
        }
    }
}

impl MonsterQuery {
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("lang", &self.lang)
                .append_pair("Q", &self.batch_size.to_string())
                .append_pair("O", &self.offset.to_string())
                .append_pair("T", "all")
                .append_pair("F[S]", "undefined");
            for _ in 0..CATEGORY_SLOTS {
                pairs.append_pair("CS[]", "0");
            }
        }
        url
    }
}
