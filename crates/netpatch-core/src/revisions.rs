//! The patch revision catalog.
//!
//! Each revision describes the Python functions inserted before the anchor
//! definition and the call lines inserted after the anchor call. Revisions
//! are cumulative: r2 carries everything r1 does plus its own additions,
//! and applying the current revision to a target patched at an older one
//! replaces the older text wholesale.

/// One revision of the network-resolution patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision {
    /// Revision number; higher supersedes lower.
    pub number: u32,
    /// One-line description for status output.
    pub summary: &'static str,
    /// Python function definitions, inserted before the anchor definition.
    pub functions: &'static [&'static str],
    /// Call expressions, inserted after the anchor call in startup order.
    pub calls: &'static [&'static str],
}

const AIODNS_EDNS_FN: &str = r#"def _patch_aiodns_to_disable_edns() -> None:
    """Disable EDNS cookies in aiodns by setting default flags to 0.

    c-ares 1.33.0+ enables EDNS cookies by default which can cause timeouts
    with some DNS servers. We disable EDNS (and thus cookies) by default
    unless flags are explicitly set.
    """
    try:
        import aiodns  # noqa: PLC0415
    except ImportError:
        return

    original_query = aiodns.DNSResolver.query

    def patched_query(self, host, qtype, flags=0):  # noqa: ANN001, ANN202
        """Wrapper to set flags=0 by default instead of None."""
        return original_query(self, host, qtype, flags)

    aiodns.DNSResolver.query = patched_query
"#;

const GETADDRINFO_FAMILY_FN: &str = r#"def _patch_getaddrinfo_to_prefer_ipv4() -> None:
    """Default socket.getaddrinfo to the IPv4 family when none is given.

    Dual-stack containers without a routable IPv6 path resolve AAAA
    records first and stall until the connect attempt times out.
    """
    import socket  # noqa: PLC0415

    original_getaddrinfo = socket.getaddrinfo

    def patched_getaddrinfo(host, port, family=0, *args, **kwargs):  # noqa: ANN001, ANN002, ANN003, ANN202
        """Wrapper to substitute AF_INET for the unspecified family."""
        if family == 0:
            family = socket.AF_INET
        return original_getaddrinfo(host, port, family, *args, **kwargs)

    socket.getaddrinfo = patched_getaddrinfo
"#;

const AIOHTTP_FAMILY_FN: &str = r#"def _patch_aiohttp_connector_family() -> None:
    """Default aiohttp.TCPConnector to the IPv4 family.

    Only takes effect when HA_DISABLE_IPV6 is set in the environment, so
    images with a working IPv6 path keep dual-stack behaviour.
    """
    import os  # noqa: PLC0415

    if not os.environ.get("HA_DISABLE_IPV6"):
        return

    try:
        import aiohttp  # noqa: PLC0415
    except ImportError:
        return

    import socket  # noqa: PLC0415

    original_init = aiohttp.TCPConnector.__init__

    def patched_init(self, *args, **kwargs):  # noqa: ANN001, ANN002, ANN003, ANN202
        """Wrapper to fill in family=AF_INET unless explicitly set."""
        kwargs.setdefault("family", socket.AF_INET)
        return original_init(self, *args, **kwargs)

    aiohttp.TCPConnector.__init__ = patched_init
"#;

/// All known revisions, oldest first.
pub const CATALOG: &[Revision] = &[
    Revision {
        number: 1,
        summary: "disable EDNS cookies in aiodns",
        functions: &[AIODNS_EDNS_FN],
        calls: &["_patch_aiodns_to_disable_edns()"],
    },
    Revision {
        number: 2,
        summary: "disable EDNS cookies; prefer IPv4 for socket resolution",
        functions: &[AIODNS_EDNS_FN, GETADDRINFO_FAMILY_FN],
        calls: &[
            "_patch_aiodns_to_disable_edns()",
            "_patch_getaddrinfo_to_prefer_ipv4()",
        ],
    },
    Revision {
        number: 3,
        summary: "disable EDNS cookies; prefer IPv4 for sockets and aiohttp connectors",
        functions: &[AIODNS_EDNS_FN, GETADDRINFO_FAMILY_FN, AIOHTTP_FAMILY_FN],
        calls: &[
            "_patch_aiodns_to_disable_edns()",
            "_patch_getaddrinfo_to_prefer_ipv4()",
            "_patch_aiohttp_connector_family()",
        ],
    },
];

/// The newest revision, the one `apply` installs.
pub fn current() -> &'static Revision {
    &CATALOG[CATALOG.len() - 1]
}

/// Look up a revision by number.
pub fn get(number: u32) -> Option<&'static Revision> {
    CATALOG.iter().find(|revision| revision.number == number)
}
