//! Endpoint registry: Alma deployment regions and their API hosts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Path prefix shared by every Alma REST resource.
pub const API_PATH: &str = "/almaws/v1/";

/// A geographic Alma deployment. Each region is served from its own host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Us,
    Eu,
    Apac,
    Ca,
    Cn,
}

impl Region {
    pub const ALL: [Region; 5] = [Region::Us, Region::Eu, Region::Apac, Region::Ca, Region::Cn];

    /// Short code used in configuration (`ALMA_API_REGION`).
    pub fn code(self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Eu => "EU",
            Region::Apac => "APAC",
            Region::Ca => "CA",
            Region::Cn => "CN",
        }
    }

    /// Scheme and host of the region's API gateway, without a trailing slash.
    pub fn endpoint(self) -> &'static str {
        match self {
            Region::Us => "https://api-na.hosted.exlibrisgroup.com",
            Region::Eu => "https://api-eu.hosted.exlibrisgroup.com",
            Region::Apac => "https://api-ap.hosted.exlibrisgroup.com",
            Region::Ca => "https://api-ca.hosted.exlibrisgroup.com",
            Region::Cn => "https://api-cn.hosted.exlibrisgroup.com.cn",
        }
    }

    /// Base URL every resource path is appended to.
    pub fn base_url(self) -> String {
        base_url_for(self.endpoint())
    }
}

/// Join a host with the API path. Any trailing slash on `host` is dropped.
pub(crate) fn base_url_for(host: &str) -> String {
    format!("{}{API_PATH}", host.trim_end_matches('/'))
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ApiError::UnknownRegion(s.to_string()))
    }
}
