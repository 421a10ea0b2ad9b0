//! Address capture types.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::mapper::Shape;

// =============================================================================
// Records
// =============================================================================

/// A candidate returned by a find request.
///
/// A candidate is either a full address (`kind == "Address"`) or a
/// container such as a postcode or street whose `id` can be passed back as
/// [`FindOptions::container`] to drill down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Id to retrieve or to use as a container.
    pub id: String,
    /// Type of the candidate, e.g. `Address` or `Postcode`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Name of the candidate.
    pub text: String,
    /// Character ranges of `text` that matched the search.
    pub highlight: String,
    /// Descriptive information about the candidate.
    pub description: String,
}

impl Address {
    /// Whether the candidate is a complete address rather than a container.
    pub fn is_address(&self) -> bool {
        self.kind == "Address"
    }
}

impl Shape for Address {
    const NAME: &'static str = "Address";
}

/// A fully retrieved address.
///
/// Every attribute is optional: the service omits the ones it has no data
/// for, and fields it adds over time are ignored. Two detailed addresses are
/// equal when their ids are equal.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailedAddress {
    pub admin_area_code: Option<String>,
    pub admin_area_name: Option<String>,
    pub barcode: Option<String>,
    pub block: Option<String>,
    pub building_name: Option<String>,
    pub building_number: Option<String>,
    pub city: Option<String>,
    pub company: Option<String>,
    pub country_iso2: Option<String>,
    pub country_iso3: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub country_iso_number: Option<u32>,
    pub country_name: Option<String>,
    pub data_level: Option<String>,
    pub department: Option<String>,
    pub district: Option<String>,
    pub domestic_id: Option<String>,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field4: Option<String>,
    pub field5: Option<String>,
    pub field6: Option<String>,
    pub field7: Option<String>,
    pub field8: Option<String>,
    pub field9: Option<String>,
    pub field10: Option<String>,
    pub field11: Option<String>,
    pub field12: Option<String>,
    pub field13: Option<String>,
    pub field14: Option<String>,
    pub field15: Option<String>,
    pub field16: Option<String>,
    pub field17: Option<String>,
    pub field18: Option<String>,
    pub field19: Option<String>,
    pub field20: Option<String>,
    pub id: Option<String>,
    pub label: Option<String>,
    pub language: Option<String>,
    pub language_alternatives: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub line3: Option<String>,
    pub line4: Option<String>,
    pub line5: Option<String>,
    pub neighbourhood: Option<String>,
    pub po_box_number: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub province_name: Option<String>,
    pub secondary_street: Option<String>,
    pub sorting_number1: Option<String>,
    pub sorting_number2: Option<String>,
    pub street: Option<String>,
    pub sub_building: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl DetailedAddress {
    /// Whether both addresses carry the same id.
    pub fn same_id(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Custom field `n` (1 to 20), as requested through
    /// [`RetrieveOptions::field_format`].
    pub fn field(&self, n: usize) -> Option<&str> {
        let field = match n {
            1 => &self.field1,
            2 => &self.field2,
            3 => &self.field3,
            4 => &self.field4,
            5 => &self.field5,
            6 => &self.field6,
            7 => &self.field7,
            8 => &self.field8,
            9 => &self.field9,
            10 => &self.field10,
            11 => &self.field11,
            12 => &self.field12,
            13 => &self.field13,
            14 => &self.field14,
            15 => &self.field15,
            16 => &self.field16,
            17 => &self.field17,
            18 => &self.field18,
            19 => &self.field19,
            20 => &self.field20,
            _ => return None,
        };
        field.as_deref()
    }
}

impl PartialEq for DetailedAddress {
    fn eq(&self, other: &Self) -> bool {
        self.same_id(other)
    }
}

impl Eq for DetailedAddress {}

impl Shape for DetailedAddress {
    const NAME: &'static str = "DetailedAddress";
}

// =============================================================================
// Options
// =============================================================================

/// Options for [`AddressGateway::find`](super::AddressGateway::find).
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindOptions {
    /// Search text: a postcode, street, building or free-form address.
    pub text: String,
    /// Comma-separated ISO 2 or 3 character country codes to limit results.
    pub countries: Option<String>,
    /// Country, coordinates or IP address used to bias the results.
    pub origin: Option<String>,
    /// Id of a container returned by a previous find.
    pub container: Option<String>,
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Preferred language. Defaults to the configured language.
    pub language: Option<String>,
}

impl FindOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn countries(mut self, countries: impl Into<String>) -> Self {
        self.countries = Some(countries.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn container(mut self, container: impl Into<String>) -> Self {
        self.container = Some(container.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Options for [`AddressGateway::retrieve`](super::AddressGateway::retrieve).
///
/// The `field_N_format` options request extra data in
/// [`DetailedAddress::field`], e.g. `{Latitude}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetrieveOptions {
    /// Id of an address candidate.
    pub id: String,
    pub field_1_format: Option<String>,
    pub field_2_format: Option<String>,
    pub field_3_format: Option<String>,
    pub field_4_format: Option<String>,
    pub field_5_format: Option<String>,
}

impl RetrieveOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Requests custom field `n` (1 to 5) with the given format. Other
    /// indices are ignored.
    pub fn field_format(mut self, n: usize, format: impl Into<String>) -> Self {
        let slot = match n {
            1 => &mut self.field_1_format,
            2 => &mut self.field_2_format,
            3 => &mut self.field_3_format,
            4 => &mut self.field_4_format,
            5 => &mut self.field_5_format,
            _ => return self,
        };
        *slot = Some(format.into());
        self
    }
}
