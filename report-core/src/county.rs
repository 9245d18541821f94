//! County property-record lookup.
//!
//! An immutable, ordered table mapping the cities we manage in to the
//! county web sites that hold their property records. Towns that straddle a
//! county line list every county site, in table order.

use serde::Serialize;
use tracing::{debug, info};

/// Maximum number of suggestions returned by [`suggest`].
pub const MAX_SUGGESTIONS: usize = 5;

const WAKE: &str = "https://services.wakegov.com/realestate/";
const JOHNSTON: &str = "https://www.johnstonnc.com/tax2/";
const GREENVILLE_SC: &str = "https://www.greenvillecounty.org/appsAS400/RealProperty/";
const SPARTANBURG: &str = "https://qpublic.schneidercorp.com/Application.aspx?App=SpartanburgCountySC&Layer=Parcels&PageType=Search";
const ANDERSON: &str = "https://acpass.andersoncountysc.org/real_prop_search.htm";
const PICKENS: &str = "https://qpublic.schneidercorp.com/Application.aspx?AppID=927&LayerID=18058&PageTypeID=2&PageID=8075";
const YORK: &str = "https://experience.arcgis.com/experience/e827d330f20a4508aa6777bf2c0b94e3/page/Address-Search/#data_s=id%3AdataSource_2-Parcels_5039~dataSource_11-18220f7f386-layer-86-182abbc3d1c-layer-44%3A118";
const ORANGE: &str = "https://property.spatialest.com/nc/orange/#/";
const DURHAM: &str = "https://property.spatialest.com/nc/durham/#/";
const NEW_HANOVER: &str = "https://etax.nhcgov.com/pt/search/commonsearch.aspx?mode=address";
const PENDER: &str = "https://mss.pendercountync.gov/css/citizens/RealEstate/Default.aspx?mode=new";
const BRUNSWICK: &str = "https://tax.brunsco.net/itsnet/RealEstate.aspx";
const MECKLENBURG: &str = "https://property.spatialest.com/nc/mecklenburg#/";
const GASTON: &str = "https://gastonnc.devnetwedge.com/";
const STANLY: &str = "https://www.stanlytax.com/taxes.html#/WildfireSearch";
const CABARRUS: &str = "https://tax.cabarruscounty.us/TaxBill.aspx";
const UNION: &str = "https://unionnc.devnetwedge.com/";
const CUMBERLAND: &str = "https://taxpwa.co.cumberland.nc.us/camapwa/";
const DAVIDSON: &str = "http://www2.co.davidson.nc.us/taxnet/RealEstate.aspx";
const RANDOLPH: &str = "http://txpwa.co.randolph.nc.us/camapwa/";
const FORSYTH: &str = "https://lrcpwa.ncptscloud.com/forsyth/";
const GUILFORD: &str = "https://taxcama.guilfordcountync.gov/camapwa/searchProperty.aspx";
const DAVIE: &str = "https://maps.daviecountync.gov/itsnet/RealEstate.aspx";

/// One row of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountyEntry {
    pub county: &'static str,
    pub cities: &'static [&'static str],
    /// Alternate spellings accepted by [`lookup`] but not suggested.
    pub aliases: &'static [&'static str],
    pub urls: &'static [&'static str],
}

impl CountyEntry {
    fn matches(
        &self,
        city: &str,
    ) -> bool {
        self.cities.contains(&city) || self.aliases.contains(&city)
    }
}

const fn entry(
    county: &'static str,
    cities: &'static [&'static str],
    urls: &'static [&'static str],
) -> CountyEntry {
    CountyEntry {
        county,
        cities,
        aliases: &[],
        urls,
    }
}

pub const COUNTY_TABLE: &[CountyEntry] = &[
    CountyEntry {
        county: "Wake County, NC",
        cities: &[
            "Raleigh",
            "Cary",
            "Apex",
            "Fuquay-Varina",
            "Garner",
            "Knightdale",
            "Wake Forest",
            "Morrisville",
            "Holly Springs",
            "Wendell",
        ],
        aliases: &["Fuquay Varina"],
        urls: &[WAKE],
    },
    entry("Johnston County, NC", &["Clayton", "Smithfield"], &[JOHNSTON]),
    entry(
        "Greenville County, SC",
        &["Greenville", "Mauldin", "Greer", "Simpsonville", "Travelers Rest"],
        &[GREENVILLE_SC],
    ),
    entry("Spartanburg County, SC", &["Spartanburg"], &[SPARTANBURG]),
    entry(
        "Anderson/Greenville Counties, SC",
        &["Piedmont", "Williamston", "Pelzer", "Powdersville"],
        &[ANDERSON, GREENVILLE_SC],
    ),
    entry("Pickens County, SC", &["Easley", "Clemson"], &[PICKENS]),
    entry(
        "York County, SC",
        &[
            "Rock Hill",
            "York",
            "Fort Mill",
            "Tega Cay",
            "Indian Land",
            "Clover",
            "Hickory Grove",
            "Lake Wylie",
            "McConnells",
            "Sharon",
        ],
        &[YORK],
    ),
    entry("Orange County, NC", &["Chapel Hill"], &[ORANGE]),
    entry("Durham County, NC", &["Durham"], &[DURHAM]),
    entry(
        "New Hanover County, NC",
        &["Wilmington", "Castle Hayne", "Carolina Beach", "Kure Beach"],
        &[NEW_HANOVER],
    ),
    entry("Pender County, NC", &["Burgaw", "Hampstead"], &[PENDER]),
    entry(
        "Brunswick County, NC",
        &["Leland", "Navassa", "Winnabow"],
        &[BRUNSWICK],
    ),
    entry(
        "Mecklenburg County, NC",
        &["Charlotte", "Huntersville", "Matthews", "Mint Hill", "Cornelius"],
        &[MECKLENBURG],
    ),
    entry(
        "Gaston County, NC",
        &["Belmont", "Gastonia", "Mount Holly"],
        &[GASTON],
    ),
    entry("Stanly County, NC", &["Locust", "King"], &[STANLY]),
    entry("Cabarrus County, NC", &["Concord"], &[CABARRUS]),
    entry("Union County, NC", &["Indian Trail", "Waxhaw"], &[UNION]),
    entry("Cumberland County, NC", &["Fayetteville"], &[CUMBERLAND]),
    entry("Davidson County, NC", &["Lexington"], &[DAVIDSON]),
    entry("Randolph County, NC", &["Archdale"], &[RANDOLPH]),
    CountyEntry {
        county: "Forsyth County, NC",
        cities: &["Clemmons", "Pfafftown", "Winston-Salem"],
        aliases: &["Winston Salem"],
        urls: &[FORSYTH],
    },
    entry(
        "Guilford County, NC",
        &["Greensboro", "High Point", "Jamestown"],
        &[GUILFORD],
    ),
    entry(
        "Davie County, NC",
        &["Mocksville", "Bermuda Run", "Cooleemee", "Advance"],
        &[DAVIE],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountySearchResult {
    pub city: String,
    pub urls: Vec<&'static str>,
    pub found: bool,
}

/// Finds the county record sites for `city`.
///
/// Matching is exact and case-sensitive after trimming surrounding
/// whitespace. An unknown city yields `found == false` and no URLs.
pub fn lookup(city: &str) -> CountySearchResult {
    let city = city.trim();
    let entry = COUNTY_TABLE.iter().find(|entry| entry.matches(city));

    match entry {
        Some(entry) => {
            info!(city, county = entry.county, urls = entry.urls.len(), "county match");
            CountySearchResult {
                city: city.to_string(),
                urls: entry.urls.to_vec(),
                found: true,
            }
        }
        None => {
            debug!(city, "no county match");
            CountySearchResult {
                city: city.to_string(),
                urls: Vec::new(),
                found: false,
            }
        }
    }
}

/// Every supported city, primary spellings only, in table order.
pub fn supported_cities() -> Vec<&'static str> {
    COUNTY_TABLE
        .iter()
        .flat_map(|entry| entry.cities.iter().copied())
        .collect()
}

/// Up to [`MAX_SUGGESTIONS`] cities containing `input`, ignoring case.
///
/// Inputs of one character or less produce no suggestions.
pub fn suggest(input: &str) -> Vec<&'static str> {
    if input.chars().count() <= 1 {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    supported_cities()
        .into_iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}
