//! Fixed option lists offered by the search forms.

pub const DISTRICTS: [&str; 20] = [
    "Srinagar", "Jammu", "Anantnag", "Baramulla", "Budgam",
    "Ganderbal", "Kupwara", "Pulwama", "Shopian", "Kulgam",
    "Udhampur", "Kathua", "Rajouri", "Poonch", "Doda",
    "Kishtwar", "Ramban", "Reasi", "Samba", "Bandipora",
];

/// Districts highlighted in the "Explore Our Districts" grid
pub const FEATURED_DISTRICT_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionItem {
    pub value: &'static str,
    pub label: &'static str,
}

const fn item(value: &'static str, label: &'static str) -> OptionItem {
    OptionItem { value, label }
}

pub const PROPERTY_TYPES: [OptionItem; 4] = [
    item("residential", "Residential"),
    item("commercial", "Commercial"),
    item("land", "Land"),
    item("plot", "Plot"),
];

pub const CATEGORIES: [OptionItem; 4] = [
    item("sale", "For Sale"),
    item("rent", "For Rent"),
    item("homestay", "Homestay"),
    item("holiday-home", "Holiday Home"),
];

pub const BEDROOMS: [OptionItem; 4] = [
    item("1", "1 BHK"),
    item("2", "2 BHK"),
    item("3", "3 BHK"),
    item("4", "4+ BHK"),
];

pub fn find_district(name: &str) -> Option<&'static str> {
    let name = name.trim();
    DISTRICTS.iter().copied().find(|d| d.eq_ignore_ascii_case(name))
}

/// Match either the value or the label of an option, ignoring case
pub fn find_option(options: &[OptionItem], input: &str) -> Option<&'static str> {
    let input = input.trim();
    options
        .iter()
        .find(|o| o.value.eq_ignore_ascii_case(input) || o.label.eq_ignore_ascii_case(input))
        .map(|o| o.value)
}

pub fn featured_districts() -> &'static [&'static str] {
    &DISTRICTS[..FEATURED_DISTRICT_COUNT]
}
