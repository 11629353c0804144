//! Residue type codes per naming scheme.
//!
//! Each entry lists the codes one scheme uses for one canonical residue.
//! GLYCAM terminal, substituent and glycoprotein residues (ROH, OME, TBT,
//! NLN, OLS, OLT, ZOLS, ZOLT, SO3, MEX, ACX, CA2, 045, 245) are left out
//! on purpose: they are never ring sugars.

use super::{NamingScheme, SchemeCodes};

/// `(canonical id, scheme, codes)` in table-build order.
pub(super) const RESIDUE_CODES: &[SchemeCodes] = &[
    (
        "Glc",
        NamingScheme::Common,
        &["BGC", "GLC", "MAL"],
    ),
    (
        "Glc",
        NamingScheme::Charmm,
        &["AGLC", "BGLC"],
    ),
    (
        "Glc",
        NamingScheme::Glycam,
        &[
            "0GA", "0GB", "0gA", "0gB", "1GA", "1GB", "1gA", "1gB", "2GA",
            "2GB", "2gA", "2gB", "3GA", "3GB", "3gA", "3gB", "4GA", "4GB",
            "4gA", "4gB", "6GA", "6GB", "6gA", "6gB", "PGA", "PGB", "PgA",
            "PgB", "QGA", "QGB", "QgA", "QgB", "RGA", "RGB", "RgA", "RgB",
            "SGA", "SGB", "SgA", "SgB", "TGA", "TGB", "TgA", "TgB", "UGA",
            "UGB", "UgA", "UgB", "VGA", "VGB", "VgA", "VgB", "WGA", "WGB",
            "WgA", "WgB", "XGA", "XGB", "XgA", "XgB", "YGA", "YGB", "YgA",
            "YgB", "ZGA", "ZGB", "ZgA", "ZgB",
        ],
    ),
    (
        "Man",
        NamingScheme::Common,
        &["BMA", "MAN"],
    ),
    (
        "Man",
        NamingScheme::Charmm,
        &["AMAN", "BMAN"],
    ),
    (
        "Man",
        NamingScheme::Glycam,
        &[
            "0MA", "0MB", "0mA", "0mB", "1MA", "1MB", "1mA", "1mB", "2MA",
            "2MB", "2mA", "2mB", "3MA", "3MB", "3mA", "3mB", "4MA", "4MB",
            "4mA", "4mB", "6MA", "6MB", "6mA", "6mB", "PMA", "PMB", "PmA",
            "PmB", "QMA", "QMB", "QmA", "QmB", "RMA", "RMB", "RmA", "RmB",
            "SMA", "SMB", "SmA", "SmB", "TMA", "TMB", "TmA", "TmB", "UMA",
            "UMB", "UmA", "UmB", "VMA", "VMB", "VmA", "VmB", "WMA", "WMB",
            "WmA", "WmB", "XMA", "XMB", "XmA", "XmB", "YMA", "YMB", "YmA",
            "YmB", "ZMA", "ZMB", "ZmA", "ZmB",
        ],
    ),
    (
        "Gal",
        NamingScheme::Common,
        &["GAL", "GLA"],
    ),
    (
        "Gal",
        NamingScheme::Charmm,
        &["AGAL", "BGAL"],
    ),
    (
        "Gal",
        NamingScheme::Glycam,
        &[
            "0LA", "0LB", "0lA", "0lB", "1LA", "1LB", "1lA", "1lB", "2LA",
            "2LB", "2lA", "2lB", "3LA", "3LB", "3lA", "3lB", "4LA", "4LB",
            "4lA", "4lB", "6LA", "6LB", "6lA", "6lB", "PLA", "PLB", "PlA",
            "PlB", "QLA", "QLB", "QlA", "QlB", "RLA", "RLB", "RlA", "RlB",
            "SLA", "SLB", "SlA", "SlB", "TLA", "TLB", "TlA", "TlB", "ULA",
            "ULB", "UlA", "UlB", "VLA", "VLB", "VlA", "VlB", "WLA", "WLB",
            "WlA", "WlB", "XLA", "XLB", "XlA", "XlB", "YLA", "YLB", "YlA",
            "YlB", "ZLA", "ZLB", "ZlA", "ZlB",
        ],
    ),
    (
        "Gul",
        NamingScheme::Common,
        &["GL0", "GUL", "GUP"],
    ),
    (
        "Gul",
        NamingScheme::Charmm,
        &["AGUL", "BGUL"],
    ),
    (
        "Gul",
        NamingScheme::Glycam,
        &[
            "0KA", "0KB", "0kA", "0kB", "1KA", "1KB", "1kA", "1kB", "2KA",
            "2KB", "2kA", "2kB", "3KA", "3KB", "3kA", "3kB", "4KA", "4KB",
            "4kA", "4kB", "6KA", "6KB", "6kA", "6kB", "PKA", "PKB", "PkA",
            "PkB", "QKA", "QKB", "QkA", "QkB", "RKA", "RKB", "RkA", "RkB",
            "SKA", "SKB", "SkA", "SkB", "TKA", "TKB", "TkA", "TkB", "UKA",
            "UKB", "UkA", "UkB", "VKA", "VKB", "VkA", "VkB", "WKA", "WKB",
            "WkA", "WkB", "XKA", "XKB", "XkA", "XkB", "YKA", "YKB", "YkA",
            "YkB", "ZKA", "ZKB", "ZkA", "ZkB",
        ],
    ),
    (
        "Alt",
        NamingScheme::Common,
        &["ALT"],
    ),
    (
        "Alt",
        NamingScheme::Charmm,
        &["AALT", "BALT"],
    ),
    (
        "Alt",
        NamingScheme::Glycam,
        &[
            "0EA", "0EB", "0eA", "0eB", "1EA", "1EB", "1eA", "1eB", "2EA",
            "2EB", "2eA", "2eB", "3EA", "3EB", "3eA", "3eB", "4EA", "4EB",
            "4eA", "4eB", "6EA", "6EB", "6eA", "6eB", "PEA", "PEB", "PeA",
            "PeB", "QEA", "QEB", "QeA", "QeB", "REA", "REB", "ReA", "ReB",
            "SEA", "SEB", "SeA", "SeB", "TEA", "TEB", "TeA", "TeB", "UEA",
            "UEB", "UeA", "UeB", "VEA", "VEB", "VeA", "VeB", "WEA", "WEB",
            "WeA", "WeB", "XEA", "XEB", "XeA", "XeB", "YEA", "YEB", "YeA",
            "YeB", "ZEA", "ZEB", "ZeA", "ZeB",
        ],
    ),
    (
        "All",
        NamingScheme::Common,
        &["ALL", "WOO"],
    ),
    (
        "All",
        NamingScheme::Charmm,
        &["AALL", "BALL"],
    ),
    (
        "All",
        NamingScheme::Glycam,
        &[
            "0NA", "0NB", "0nA", "0nB", "1NA", "1NB", "1nA", "1nB", "2NA",
            "2NB", "2nA", "2nB", "3NA", "3NB", "3nA", "3nB", "4NA", "4NB",
            "4nA", "4nB", "6NA", "6NB", "6nA", "6nB", "PNA", "PNB", "PnA",
            "PnB", "QNA", "QNB", "QnA", "QnB", "RNA", "RNB", "RnA", "RnB",
            "SNA", "SNB", "SnA", "SnB", "TNA", "TNB", "TnA", "TnB", "UNA",
            "UNB", "UnA", "UnB", "VNA", "VNB", "VnA", "VnB", "WNA", "WNB",
            "WnA", "WnB", "XNA", "XNB", "XnA", "XnB", "YNA", "YNB", "YnA",
            "YnB", "ZNA", "ZNB", "ZnA", "ZnB",
        ],
    ),
    (
        "Tal",
        NamingScheme::Common,
        &["TAL"],
    ),
    (
        "Tal",
        NamingScheme::Charmm,
        &["ATAL", "BTAL"],
    ),
    (
        "Tal",
        NamingScheme::Glycam,
        &[
            "0TA", "0TB", "0tA", "0tB", "1TA", "1TB", "1tA", "1tB", "2TA",
            "2TB", "2tA", "2tB", "3TA", "3TB", "3tA", "3tB", "4TA", "4TB",
            "4tA", "4tB", "6TA", "6TB", "6tA", "6tB", "PTA", "PTB", "PtA",
            "PtB", "QTA", "QTB", "QtA", "QtB", "RTA", "RTB", "RtA", "RtB",
            "STA", "STB", "StA", "StB", "TTA", "TTB", "TtA", "TtB", "UTA",
            "UTB", "UtA", "UtB", "VTA", "VTB", "VtA", "VtB", "WTA", "WTB",
            "WtA", "WtB", "XTA", "XTB", "XtA", "XtB", "YTA", "YTB", "YtA",
            "YtB", "ZTA", "ZTB", "ZtA", "ZtB",
        ],
    ),
    (
        "Ido",
        NamingScheme::Common,
        &["IDO"],
    ),
    (
        "Ido",
        NamingScheme::Charmm,
        &["AIDO", "BIDO"],
    ),
    (
        "GlcNAc",
        NamingScheme::Common,
        &[
            "4YS", "BGLN", "NAG", "NDG", "SGN",
        ],
    ),
    (
        "GlcNAc",
        NamingScheme::Charmm,
        &["AGLCNA", "BGLCN0", "BGLCNA"],
    ),
    (
        "GlcNAc",
        NamingScheme::Glycam,
        &[
            "0YA", "0YB", "0yA", "0yB", "1YA", "1YB", "1yA", "1yB", "3YA",
            "3YB", "3yA", "3yB", "4YA", "4YB", "4yA", "4yB", "6YA", "6YB",
            "6yA", "6yB", "QYA", "QYB", "QyA", "QyB", "UYA", "UYB", "UYY",
            "UyA", "UyB", "VYA", "VYB", "VYY", "VyA", "VyB", "WYA", "WYB",
            "WyA", "WyB", "XYY",
        ],
    ),
    (
        "ManNAc",
        NamingScheme::Glycam,
        &[
            "0WA", "0WB", "0wA", "0wB", "1WA", "1WB", "1wA", "1wB", "3WA",
            "3WB", "3wA", "3wB", "4WA", "4WB", "4wA", "4wB", "6WA", "6WB",
            "6wA", "6wB", "QWA", "QWB", "QwA", "QwB", "UWA", "UWB", "UwA",
            "UwB", "VWA", "VWB", "VwA", "VwB", "WWA", "WWB", "WwA", "WwB",
        ],
    ),
    (
        "GalNAc",
        NamingScheme::Common,
        &["NGA"],
    ),
    (
        "GalNAc",
        NamingScheme::Charmm,
        &["AGALNA", "BGALNA"],
    ),
    (
        "GalNAc",
        NamingScheme::Glycam,
        &[
            "0VA", "0VB", "0vA", "0vB", "1VA", "1VB", "1vA", "1vB", "3VA",
            "3VB", "3vA", "3vB", "4VA", "4VB", "4vA", "4vB", "6VA", "6VB",
            "6vA", "6vB", "QVA", "QVB", "QvA", "QvB", "UVA", "UVB", "UvA",
            "UvB", "VVA", "VVB", "VvA", "VvB", "WVA", "WVB", "WvA", "WvB",
        ],
    ),
    (
        "GlcN",
        NamingScheme::Common,
        &["GCS"],
    ),
    (
        "GlcN",
        NamingScheme::Glycam,
        &[
            "0YN", "0YNP", "0YS", "0Yn", "0YnP", "0Ys", "0yS", "0ys", "3YS",
            "3Ys", "3yS", "3ys", "4YS", "4Ys", "4yS", "4ys", "6YS", "6Ys",
            "QYS", "QYs", "UYS", "UYs", "VYS", "VYs", "WYS", "WYs",
        ],
    ),
    (
        "GlcA",
        NamingScheme::Common,
        &["GCU"],
    ),
    (
        "GlcA",
        NamingScheme::Charmm,
        &["AGLCA", "BGLCA", "BGLCA0"],
    ),
    (
        "GlcA",
        NamingScheme::Glycam,
        &[
            "0ZA", "0ZB", "0ZBP", "0zA", "0zB", "1ZA", "1ZB", "1zA", "1zB",
            "2ZA", "2ZB", "2zA", "2zB", "3ZA", "3ZB", "3zA", "3zB", "4ZA",
            "4ZB", "4zA", "4zB", "TZA", "TZB", "TzA", "TzB", "WZA", "WZB",
            "WzA", "WzB", "YZA", "YZB", "YzA", "YzB", "ZZA", "ZZB", "ZzA",
            "ZzB",
        ],
    ),
    (
        "ManA",
        NamingScheme::Common,
        &["BEM", "MAV"],
    ),
    (
        "GalA",
        NamingScheme::Common,
        &["ADA"],
    ),
    (
        "GalA",
        NamingScheme::Glycam,
        &[
            "0OA", "0OB", "0oA", "0oB", "1OA", "1OB", "1oA", "1oB", "2OA",
            "2OB", "2oA", "2oB", "3OA", "3OB", "3oA", "3oB", "4OA", "4OB",
            "4oA", "4oB", "TOA", "TOB", "ToA", "ToB", "WOA", "WOB", "WoA",
            "WoB", "YOA", "YOB", "YoA", "YoB", "ZOA", "ZOB", "ZoA", "ZoB",
        ],
    ),
    (
        "GulA",
        NamingScheme::Common,
        &["LGU"],
    ),
    (
        "IdoA",
        NamingScheme::Common,
        &["IDS"],
    ),
    (
        "IdoA",
        NamingScheme::Charmm,
        &["AIDOA", "BIDOA"],
    ),
    (
        "IdoA",
        NamingScheme::Glycam,
        &[
            "0UA", "0UB", "0uA", "0uB", "1UA", "1UB", "1uA", "1uB", "2UA",
            "2UB", "2uA", "2uB", "3UA", "3UB", "3uA", "3uB", "4UA", "4UB",
            "4uA", "4uB", "TUA", "TUB", "TuA", "TuB", "WUA", "WUB", "WuA",
            "WuB", "YUA", "YUB", "YuA", "YuAP", "YuB", "ZUA", "ZUB", "ZuA",
            "ZuB",
        ],
    ),
    (
        "Qui",
        NamingScheme::Common,
        &["QUI"],
    ),
    (
        "Qui",
        NamingScheme::Glycam,
        &[
            "0QA", "0QB", "0qA", "0qB", "1QA", "1QB", "1qA", "1qB", "2QA",
            "2QB", "2qA", "2qB", "3QA", "3QB", "3qA", "3qB", "4QA", "4QB",
            "4qA", "4qB", "TQA", "TQB", "TqA", "TqB", "WQA", "WQB", "WqA",
            "WqB", "YQA", "YQB", "YqA", "YqB", "ZQA", "ZQB", "ZqA", "ZqB",
        ],
    ),
    (
        "Rha",
        NamingScheme::Common,
        &["RAM"],
    ),
    (
        "Rha",
        NamingScheme::Charmm,
        &["ARHM", "BRHM"],
    ),
    (
        "Rha",
        NamingScheme::Glycam,
        &[
            "0HA", "0HB", "0hA", "0hB", "1HA", "1HB", "1hA", "1hB", "2HA",
            "2HB", "2hA", "2hB", "3HA", "3HB", "3hA", "3hB", "4HA", "4HB",
            "4hA", "4hB", "THA", "THB", "ThA", "ThB", "WHA", "WHB", "WhA",
            "WhB", "YHA", "YHB", "YhA", "YhB", "ZHA", "ZHB", "ZhA", "ZhB",
        ],
    ),
    (
        "Fuc",
        NamingScheme::Common,
        &["FUC", "FUL"],
    ),
    (
        "Fuc",
        NamingScheme::Charmm,
        &["AFUC", "BFUC"],
    ),
    (
        "Fuc",
        NamingScheme::Glycam,
        &[
            "0FA", "0FB", "0fA", "0fB", "1FA", "1FB", "1fA", "1fB", "2FA",
            "2FB", "2fA", "2fB", "3FA", "3FB", "3fA", "3fB", "4FA", "4FB",
            "4fA", "4fB", "TFA", "TFB", "TfA", "TfB", "WFA", "WFB", "WfA",
            "WfB", "YFA", "YFB", "YfA", "YfB", "ZFA", "ZFB", "ZfA", "ZfB",
        ],
    ),
    (
        "Oli",
        NamingScheme::Common,
        &["OLI"],
    ),
    (
        "Tyv",
        NamingScheme::Common,
        &["TYV"],
    ),
    (
        "Tyv",
        NamingScheme::Glycam,
        &[
            "0TV", "0Tv", "0tV", "0tv", "1TV", "1Tv", "1tV", "1tv", "2TV",
            "2Tv", "2tV", "2tv", "4TV", "4Tv", "4tV", "4tv", "YTV", "YTv",
            "YtV", "Ytv",
        ],
    ),
    (
        "Abe",
        NamingScheme::Common,
        &["ABE"],
    ),
    (
        "Abe",
        NamingScheme::Glycam,
        &[
            "0AE", "0AF", "2AE", "2AF", "4AE", "4AF", "YAF", "YGa",
        ],
    ),
    (
        "Par",
        NamingScheme::Common,
        &["PAR"],
    ),
    (
        "Dig",
        NamingScheme::Common,
        &["DIG"],
    ),
    (
        "Col",
        NamingScheme::Common,
        &["COL"],
    ),
    (
        "Ara",
        NamingScheme::Common,
        &["AHR", "ARA"],
    ),
    (
        "Ara",
        NamingScheme::Charmm,
        &["AARB", "BARB"],
    ),
    (
        "Ara",
        NamingScheme::Glycam,
        &[
            "0AA", "0AB", "0AD", "0AU", "0aA", "0aB", "0aD", "0aU", "1AA",
            "1AB", "1AD", "1AU", "1aA", "1aB", "1aD", "1aU", "2AA", "2AB",
            "2AD", "2AU", "2aA", "2aB", "2aD", "2aU", "3AA", "3AB", "3AD",
            "3AU", "3aA", "3aB", "3aD", "3aU", "4AA", "4AB", "4aA", "4aB",
            "5AD", "5AU", "5aD", "5aU", "TAA", "TAB", "TaA", "TaB", "WAA",
            "WAB", "WaA", "WaB", "YAA", "YAB", "YaA", "YaB", "ZAA", "ZAB",
            "ZAD", "ZAU", "ZaA", "ZaB", "ZaD", "ZaU",
        ],
    ),
    (
        "Lyx",
        NamingScheme::Common,
        &["LYX"],
    ),
    (
        "Lyx",
        NamingScheme::Charmm,
        &["ALYF", "BLYF"],
    ),
    (
        "Lyx",
        NamingScheme::Glycam,
        &[
            "0DA", "0DB", "0DD", "0DU", "0dA", "0dB", "0dD", "0dU", "1DA",
            "1DB", "1DD", "1DU", "1dA", "1dB", "1dD", "1dU", "2DA", "2DB",
            "2DD", "2DU", "2dA", "2dB", "2dD", "2dU", "3DA", "3DB", "3DD",
            "3DU", "3dA", "3dB", "3dD", "3dU", "4DA", "4DB", "4dA", "4dB",
            "5DD", "5DU", "5dD", "5dU", "TDA", "TDB", "TdA", "TdB", "WDA",
            "WDB", "WdA", "WdB", "YDA", "YDB", "YdA", "YdB", "ZDA", "ZDB",
            "ZDD", "ZDU", "ZdA", "ZdB", "ZdD", "ZdU",
        ],
    ),
    (
        "Xyl",
        NamingScheme::Common,
        &[
            "LXC", "XYL", "XYP", "XYS",
        ],
    ),
    (
        "Xyl",
        NamingScheme::Charmm,
        &[
            "AXYF", "AXYL", "BXYF", "BXYL",
        ],
    ),
    (
        "Xyl",
        NamingScheme::Glycam,
        &[
            "0XA", "0XB", "0XD", "0XU", "0xA", "0xB", "0xD", "0xU", "1XA",
            "1XB", "1XD", "1XU", "1xA", "1xB", "1xD", "1xU", "2XA", "2XB",
            "2XD", "2XU", "2xA", "2xB", "2xD", "2xU", "3XA", "3XB", "3XD",
            "3XU", "3xA", "3xB", "3xD", "3xU", "4XA", "4XB", "4xA", "4xB",
            "5XD", "5XU", "5xD", "5xU", "TXA", "TXB", "TxA", "TxB", "WXA",
            "WXB", "WxA", "WxB", "YXA", "YXB", "YxA", "YxB", "ZXA", "ZXB",
            "ZXD", "ZXU", "ZxA", "ZxB", "ZxD", "ZxU",
        ],
    ),
    (
        "Rib",
        NamingScheme::Common,
        &["RIB"],
    ),
    (
        "Rib",
        NamingScheme::Charmm,
        &["ARIB", "BRIB"],
    ),
    (
        "Rib",
        NamingScheme::Glycam,
        &[
            "0RA", "0RB", "0RD", "0RU", "0rA", "0rB", "0rD", "0rU", "1RA",
            "1RB", "1RD", "1RU", "1rA", "1rB", "1rD", "1rU", "2RA", "2RB",
            "2RD", "2RU", "2rA", "2rB", "2rD", "2rU", "3RA", "3RB", "3RD",
            "3RU", "3rA", "3rB", "3rD", "3rU", "4RA", "4RB", "4rA", "4rB",
            "5RD", "5RU", "5rD", "5rU", "TRA", "TRB", "TrA", "TrB", "WRA",
            "WRB", "WrA", "WrB", "YRA", "YRB", "YrA", "YrB", "ZRA", "ZRB",
            "ZRD", "ZRU", "ZrA", "ZrB", "ZrD", "ZrU",
        ],
    ),
    (
        "Kdn",
        NamingScheme::Common,
        &["KDN"],
    ),
    (
        "Neu5Ac",
        NamingScheme::Common,
        &["SIA"],
    ),
    (
        "Neu5Ac",
        NamingScheme::Charmm,
        &["ANE5AC", "BNE5AC"],
    ),
    (
        "Neu5Ac",
        NamingScheme::Glycam,
        &[
            "0SA", "0SB", "0sA", "0sB", "4SA", "4SB", "4sA", "4sB", "7SA",
            "7SB", "7sA", "7sB", "8SA", "8SB", "8sA", "8sB", "9SA", "9SB",
            "9sA", "9sB", "ASA", "ASB", "AsA", "AsB", "BSA", "BSB", "BsA",
            "BsB", "CSA", "CSB", "CsA", "CsB", "DSA", "DSB", "DsA", "DsB",
            "ESA", "ESB", "EsA", "EsB", "FSA", "FSB", "FsA", "FsB", "GSA",
            "GSB", "GsA", "GsB", "HSA", "HSB", "HsA", "HsB", "ISA", "ISB",
            "IsA", "IsB", "JSA", "JSB", "JsA", "JsB", "KSA", "KSB", "KsA",
            "KsB",
        ],
    ),
    (
        "Neu5Gc",
        NamingScheme::Glycam,
        &[
            "0GL", "0gL", "4GL", "4gL", "7GL", "7gL", "8GL", "8gL", "9GL",
            "9gL", "AgL", "BgL", "CGL", "CgL", "DGL", "DgL", "EGL", "EgL",
            "FGL", "FgL", "GGL", "GgL", "HGL", "HgL", "IGL", "IgL", "JGL",
            "JgL", "KGL", "KgL",
        ],
    ),
    (
        "Neu",
        NamingScheme::Common,
        &["NEU"],
    ),
    (
        "Bac",
        NamingScheme::Common,
        &["BAC"],
    ),
    (
        "Bac",
        NamingScheme::Glycam,
        &[
            "0BC", "0bC", "3BC", "3bC",
        ],
    ),
    (
        "LDManHep",
        NamingScheme::Common,
        &["GMH"],
    ),
    (
        "Kdo",
        NamingScheme::Common,
        &["KDO"],
    ),
    (
        "Dha",
        NamingScheme::Common,
        &["DHA"],
    ),
    (
        "Mur",
        NamingScheme::Common,
        &["MUR"],
    ),
    (
        "Api",
        NamingScheme::Common,
        &["API"],
    ),
    (
        "Fruc",
        NamingScheme::Common,
        &["FRU"],
    ),
    (
        "Fruc",
        NamingScheme::Charmm,
        &["AFRU", "BFRU"],
    ),
    (
        "Fruc",
        NamingScheme::Glycam,
        &[
            "0CA", "0CB", "0CD", "0CU", "0cA", "0cB", "0cD", "0cU", "1CA",
            "1CB", "1CD", "1CU", "1cA", "1cB", "1cD", "1cU", "2CA", "2CB",
            "2CD", "2CU", "2cA", "2cB", "2cD", "2cU", "3CA", "3CB", "3CD",
            "3CU", "3cA", "3cB", "3cD", "3cU", "4CA", "4CB", "4CD", "4CU",
            "4cA", "4cB", "4cD", "4cU", "5CA", "5CB", "5cA", "5cB", "6CD",
            "6CU", "6cD", "6cU", "QCD", "QCU", "QcD", "QcU", "UCD", "UCU",
            "UcD", "UcU", "VCD", "VCU", "VcD", "VcU", "WCA", "WCB", "WCD",
            "WCU", "WcA", "WcB", "WcD", "WcU",
        ],
    ),
    (
        "Tag",
        NamingScheme::Common,
        &["TAG"],
    ),
    (
        "Tag",
        NamingScheme::Glycam,
        &[
            "0JA", "0JB", "0JD", "0JU", "0jA", "0jB", "0jD", "0jU", "1JA",
            "1JB", "1JD", "1JU", "1jA", "1jB", "1jD", "1jU", "2JA", "2JB",
            "2JD", "2JU", "2jA", "2jB", "2jD", "2jU", "3JA", "3JB", "3JD",
            "3JU", "3jA", "3jB", "3jD", "3jU", "4JA", "4JB", "4JD", "4JU",
            "4jA", "4jB", "4jD", "4jU", "5JA", "5JB", "5jA", "5jB", "6JD",
            "6JU", "6jD", "6jU", "QJD", "QJU", "QjD", "QjU", "UJD", "UJU",
            "UjD", "UjU", "VJD", "VJU", "VjD", "VjU", "WJA", "WJB", "WJD",
            "WJU", "WjA", "WjB", "WjD", "WjU",
        ],
    ),
    (
        "Sor",
        NamingScheme::Common,
        &["SOR"],
    ),
    (
        "Sor",
        NamingScheme::Glycam,
        &[
            "0BA", "0BB", "0BD", "0BU", "0bA", "0bB", "0bD", "0bU", "1BA",
            "1BB", "1BD", "1BU", "1bA", "1bB", "1bD", "1bU", "2BA", "2BB",
            "2BD", "2BU", "2bA", "2bB", "2bD", "2bU", "3BA", "3BB", "3BD",
            "3BU", "3bA", "3bB", "3bD", "3bU", "4BA", "4BB", "4BD", "4BU",
            "4bA", "4bB", "4bD", "4bU", "5BA", "5BB", "5bA", "5bB", "6BD",
            "6BU", "6bD", "6bU", "QBD", "QBU", "QbD", "QbU", "UBD", "UBU",
            "UbD", "UbU", "VBD", "VBU", "VbD", "VbU", "WBA", "WBB", "WBD",
            "WBU", "WbA", "WbB", "WbD", "WbU",
        ],
    ),
    (
        "Psi",
        NamingScheme::Common,
        &["PSI"],
    ),
    (
        "Psi",
        NamingScheme::Glycam,
        &[
            "0PA", "0PB", "0PD", "0PU", "0pA", "0pB", "0pD", "0pU", "1PA",
            "1PB", "1PD", "1PU", "1pA", "1pB", "1pD", "1pU", "2PA", "2PB",
            "2PD", "2PU", "2pA", "2pB", "2pD", "2pU", "3PA", "3PB", "3PD",
            "3PU", "3pA", "3pB", "3pD", "3pU", "4PA", "4PB", "4PD", "4PU",
            "4pA", "4pB", "4pD", "4pU", "5PA", "5PB", "5pA", "5pB", "6PD",
            "6PU", "6pD", "6pU", "QPD", "QPU", "QpD", "QpU", "UPD", "UPU",
            "UpD", "UpU", "VPD", "VPU", "VpD", "VpU", "WPA", "WPB", "WPD",
            "WPU", "WpA", "WpB", "WpD", "WpU",
        ],
    ),
];
