#![cfg(feature = "std")]

use std::collections::HashMap;

use bcbp::BoardingPass;
use csv::ReaderBuilder;

const PATH: &str = "fixtures/boarding-passes.csv";

#[test]
fn decode_fixtures() {
    let mut reader = ReaderBuilder::new().from_path(PATH).unwrap();
    let headers = reader.headers().unwrap().clone();

    let mut decoded = 0;

    for record in reader.records() {
        let record = record.unwrap();
        let expected: HashMap<&str, &str> = headers.iter().zip(record.iter()).collect();

        let pass = bcbp::decode(expected["barcode"]).unwrap();
        let found = fields(&pass);

        // Every column other than the name and barcode is checked.
        assert_eq!(found.len(), headers.len() - 2);

        for (field, value) in found {
            assert_eq!(value, expected[field], "{}: {field}", expected["name"]);
        }

        decoded += 1;
    }

    assert_eq!(decoded, 6);
}

fn fields(pass: &BoardingPass) -> Vec<(&'static str, String)> {
    let m = &pass.mandatory;
    let h = &pass.unique_header;
    let u = &pass.unique;
    let r = &pass.repeated;

    let security = pass.security.as_ref();

    vec![
        ("format_code", m.format_code.to_string()),
        ("legs_number", m.legs_number.to_string()),
        ("full_name", m.full_name.clone()),
        ("electronic_ticket_indicator", m.electronic_ticket_indicator.to_string()),
        ("reservation_number", m.reservation_number.clone()),
        ("from_city_iata", m.from_city_iata.clone()),
        ("to_city_iata", m.to_city_iata.clone()),
        ("operating_carrier", m.operating_carrier.clone()),
        ("flight_number", m.flight_number.clone()),
        ("flight_date", m.flight_date.to_string()),
        ("compartment_code", m.compartment_code.to_string()),
        ("seat_number", m.seat_number.clone()),
        ("sequence_number", m.sequence_number.to_string()),
        ("passenger_status", m.passenger_status.to_string()),
        ("variable_size", m.variable_size.to_string()),
        ("version_number_beginning", h.version_number_beginning.clone()),
        ("version_number", h.version_number.clone()),
        ("unique_size", h.following_structure_message_size.to_string()),
        ("passenger_description", u.passenger_description.clone()),
        ("check_in_source", u.check_in_source.clone()),
        ("boarding_pass_source", u.boarding_pass_source.clone()),
        ("boarding_pass_issue_date", u.boarding_pass_issue_date.clone()),
        ("document_type", u.document_type.clone()),
        ("airline_boarding_pass_issuer", u.airline_boarding_pass_issuer.clone()),
        ("baggage_tag", u.baggage_tag.clone()),
        ("repeated_size", pass.repeated_header.following_structure_message_size.to_string()),
        ("airline_numeric_code", r.airline_numeric_code.to_string()),
        ("document_serial_number", r.document_serial_number.to_string()),
        ("selectee_indicator", r.selectee_indicator.clone()),
        (
            "international_documentation_verification",
            r.international_documentation_verification.clone(),
        ),
        ("carrier_designator", r.carrier_designator.clone()),
        ("frequent_flier_designator", r.frequent_flier_designator.clone()),
        ("frequent_flier_number", r.frequent_flier_number.to_string()),
        ("id_ad_indicator", r.id_ad_indicator.clone()),
        ("free_baggage_allowance", r.free_baggage_allowance.clone()),
        ("fast_track", r.fast_track.clone()),
        ("airline_use", pass.airline_use.clone()),
        ("security_kind", security.map(|s| s.kind.to_string()).unwrap_or_default()),
        ("security_data", security.map(|s| s.data.clone()).unwrap_or_default()),
    ]
}
