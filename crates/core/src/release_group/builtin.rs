//! Default release group table.
//!
//! Order matters: the first token contained in a filename wins, so specific
//! tags are declared before looser tags they contain (`YTS.MX` before `YTS`).

use super::types::{ReleaseGroup, SearchableAliases};

fn group(
    canonical_name: &str,
    file_attribute_token: &str,
    matches: &[&str],
    subdivx: &[&str],
    argenteam: &str,
    opensubtitles: &str,
) -> ReleaseGroup {
    ReleaseGroup {
        canonical_name: canonical_name.to_string(),
        file_attribute_token: file_attribute_token.to_string(),
        matches: matches.iter().map(|m| m.to_string()).collect(),
        searchable_aliases: SearchableAliases {
            subdivx: subdivx.iter().map(|s| s.to_string()).collect(),
            argenteam: argenteam.to_string(),
            opensubtitles: opensubtitles.to_string(),
        },
        synthesized: false,
    }
}

pub(super) fn builtin_groups() -> Vec<ReleaseGroup> {
    vec![
        group(
            "YTS-MX",
            "YTS.MX",
            &["YTS MX", "YTSMX", "YTS-MX"],
            &["YTS MX", "YTS-MX", "YTS.MX", "YTSMX"],
            "YTS MX",
            "YTS.MX",
        ),
        group(
            "YTS-LT",
            "YTS.LT",
            &["YTS LT", "YTS-LT"],
            &["YTS LT", "YTS-LT", "YTS.LT"],
            "YTS LT",
            "YTS.LT",
        ),
        group(
            "YTS-AG",
            "YTS.AG",
            &["YTS AG", "YTS-AG"],
            &["YTS AG", "YTS-AG", "YTS.AG"],
            "YTS AG",
            "YTS.AG",
        ),
        group(
            "GalaxyRG",
            "GalaxyRG",
            &["GalaxyRG265", "GalaxyRG264"],
            &["GalaxyRG", "GalaxyRG265"],
            "GalaxyRG",
            "GalaxyRG",
        ),
        group("RARBG", "RARBG", &[], &["RARBG"], "RARBG", "RARBG"),
        group("FLUX", "FLUX", &[], &["FLUX"], "FLUX", "FLUX"),
        group("MeGusta", "MeGusta", &[], &["MeGusta"], "MeGusta", "MeGusta"),
        group("ETHEL", "ETHEL", &[], &["ETHEL"], "ETHEL", "ETHEL"),
        group("EDITH", "EDITH", &[], &["EDITH"], "EDITH", "EDITH"),
        group(
            "SuccessfulCrab",
            "SuccessfulCrab",
            &[],
            &["SuccessfulCrab"],
            "SuccessfulCrab",
            "SuccessfulCrab",
        ),
        group("NeoNoir", "NeoNoir", &[], &["NeoNoir"], "NeoNoir", "NeoNoir"),
        group("playWEB", "playWEB", &[], &["playWEB"], "playWEB", "playWEB"),
        group("CMRG", "CMRG", &[], &["CMRG"], "CMRG", "CMRG"),
        group("TGx", "TGx", &["TGX"], &["TGx"], "TGx", "TGx"),
        group("ELiTE", "ELiTE", &[], &["ELiTE"], "ELiTE", "ELiTE"),
        group("YIFY", "YIFY", &[], &["YIFY"], "YIFY", "YIFY"),
        group("YTS", "YTS", &[], &["YTS"], "YTS", "YTS"),
    ]
}
