//! Property-based tests for sitemap merging and rendering.
//!
//! These tests use proptest to generate random tag sequences and verify that
//! the dedup, newest-wins and ordering invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::domain::{AlternateTag, ImageTag, Sitemap, Tag, UrlTag};
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn timestamp(offset: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + offset * 3600, 0).unwrap()
    }

    fn url_tag() -> impl Strategy<Value = UrlTag> {
        (
            prop::sample::select(vec!["https://a.com", "https://b.com", "https://c.com"]),
            prop::option::of(0i64..50),
            prop::option::of(0.0f32..=1.0),
        )
            .prop_map(|(url, offset, priority)| {
                let mut tag = UrlTag::new(url);
                tag.last_modified = offset.map(timestamp);
                tag.priority = priority;
                tag
            })
    }

    fn any_tag() -> impl Strategy<Value = Tag> {
        prop_oneof![
            4 => url_tag().prop_map(Tag::Url),
            1 => "[a-z]{2}".prop_map(|locale| Tag::from(AlternateTag::new(locale, "https://a.com/x"))),
            1 => "[a-z]{1,4}".prop_map(|name| Tag::from(ImageTag::new(format!("https://a.com/{}.png", name)))),
        ]
    }

    proptest! {
        /// Property: each url is stored at most once, whatever the add order
        #[test]
        fn at_most_one_entry_per_url(tags in prop::collection::vec(any_tag(), 0..40)) {
            let sitemap: Sitemap = tags.into_iter().collect();

            let mut seen = HashSet::new();
            for url in sitemap.tags().iter().filter_map(Tag::as_url) {
                prop_assert!(seen.insert(url.url.clone()), "duplicate entry for {}", url.url);
            }
        }

        /// Property: the most recent dated entry survives in either add order
        #[test]
        fn newest_entry_wins_in_any_order(a in 0i64..100, b in 0i64..100) {
            prop_assume!(a != b);
            let older = UrlTag::new("https://a.com").with_last_modified(timestamp(a.min(b)));
            let newer = UrlTag::new("https://a.com").with_last_modified(timestamp(a.max(b)));

            let mut forward = Sitemap::new();
            forward.add(older.clone()).add(newer.clone());
            let mut backward = Sitemap::new();
            backward.add(newer.clone()).add(older);

            prop_assert_eq!(forward.get_url("https://a.com"), Some(&newer));
            prop_assert_eq!(backward.get_url("https://a.com"), Some(&newer));
        }

        /// Property: non-url tags all reach the renderer
        #[test]
        fn non_url_tags_pass_through(names in prop::collection::vec("[a-z]{1,6}", 0..20)) {
            let mut sitemap = Sitemap::new();
            for name in &names {
                sitemap.add(ImageTag::new(format!("https://a.com/{}.png", name)));
            }

            prop_assert_eq!(sitemap.rendered_tags().len(), names.len());
        }

        /// Property: rendering twice gives the same document
        #[test]
        fn render_is_idempotent(tags in prop::collection::vec(any_tag(), 0..30)) {
            let sitemap: Sitemap = tags.into_iter().collect();
            prop_assert_eq!(sitemap.render().unwrap(), sitemap.render().unwrap());
        }

        /// Property: distinct urls added in any order render identically
        ///
        /// Entries sharing a url are left out: when neither is strictly newer
        /// the first one added is kept, so their order does matter.
        #[test]
        fn render_ignores_insertion_order(
            tags in prop::collection::vec(any_tag(), 0..30)
                .prop_map(|tags| {
                    let mut seen = HashSet::new();
                    tags.into_iter()
                        .filter(|tag| tag.as_url().map_or(true, |url| seen.insert(url.url.clone())))
                        .collect::<Vec<_>>()
                })
                .prop_shuffle()
        ) {
            let mut reversed = tags.clone();
            reversed.reverse();

            let forward: Sitemap = tags.into_iter().collect();
            let backward: Sitemap = reversed.into_iter().collect();

            prop_assert_eq!(forward.render().unwrap(), backward.render().unwrap());
        }
    }
}
