use crate::career::domain::Dimension;

pub(crate) fn clean_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn parse_dimension(value: &str) -> Option<Dimension> {
    Dimension::parse(&clean_cell(value))
}
