//! HL7v2 result-message inspection
//!
//! The counterpart to the FHIR sequence: a simulated ORU^R01 lab-result
//! message is run through the `hl7-parser` crate and the fields worth
//! showing are pulled out by location query. The message grammar itself
//! is entirely the parser's concern.

use hl7_parser::{Message, parser::ParseError};

/// A simulated ORU^R01 observation-result message (urea and
/// electrolytes panel with a high creatinine)
pub const ORU_R01_MESSAGE: &str = concat!(
    "MSH|^~\\&|SIMHOSP|SFAC|RAPP|RFAC|20200501140643||ORU^R01|1|T|2.3|||AL||44|ASCII|\r",
    "PID|1|2590157853^^^SIMULATOR MRN^MRN|2590157853^^^SIMULATOR MRN^MRN~2478684691^^^",
    "NHSNBR^NHSNMBR||Esterkin^AKI Scenario 6^^^Miss^^CURRENT||19890118000000|F|||",
    "170 Juice Place^^London^^RW21 6KC^GBR^HOME||020 5368 1665^HOME|||||||||",
    "R^Other - Chinese^^^|||||||||\r",
    "PV1|1|O|ED^^^Simulated Hospital^^ED^^|28b|||C006^Woolfson^Kathleen^^^Dr^^^DRNBR^",
    "PRSNL^^^ORGDR|||MED||||||||||||||||||||||||||||||||||20200501140643|||\r",
    "ORC|RE|1892929505|4262718364||CM||||20200501140643|\r",
    "OBR|1|1892929505|4262718364|us-0003^UREA AND ELECTROLYTES^WinPath^^||20200501140643|",
    "20200501140643|||||||20200501140643||||||||20200501140643|||F||1|\r",
    "OBX|1|NM|tt-0003-01^Creatinine^WinPath^^||98.00|UMOLL|49 - 92|H|||F|||20200501140643|||\r",
    "NTE|0||Task cow administration||\r",
    "NTE|1||Grapefruit garlic resale camera|",
);

/// Fields of interest from an ORU^R01 message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OruSummary {
    pub message_type: Option<String>,
    pub patient_id: Option<String>,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub gender: Option<String>,
    pub observation: Option<String>,
    pub value: Option<String>,
    pub units: Option<String>,
    pub reference_range: Option<String>,
    pub abnormal_flag: Option<String>,
    pub note_count: usize,
}

/// Parse an ORU^R01 message and summarize its MSH/PID/OBX content.
///
/// Absent fields come back as `None`; only an unparseable message is an
/// error.
pub fn summarize_oru(message: &str) -> Result<OruSummary, ParseError> {
    let message = Message::parse(message)?;

    let text = |query: &str| message.query(query).map(|r| r.raw_value().to_string());

    Ok(OruSummary {
        message_type: text("MSH.9"),
        patient_id: text("PID.3.1"),
        family_name: text("PID.5.1"),
        given_name: text("PID.5.2"),
        gender: text("PID.8"),
        observation: text("OBX.3.2"),
        value: text("OBX.5"),
        units: text("OBX.6"),
        reference_range: text("OBX.7"),
        abnormal_flag: text("OBX.8"),
        note_count: message.segment_count("NTE"),
    })
}
