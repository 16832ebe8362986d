//! TypeScript type generation module.
//!
//! Exports TypeScript definitions for the request and response types so the
//! map front-end can consume the API with typed payloads.

#[cfg(test)]
mod tests {
    use std::env;
    use std::path::PathBuf;
    use ts_rs::TS;

    use crate::api::ErrorResponse;
    use crate::models::*;

    #[test]
    fn generate_typescript_types() {
        // Output directory: DISPOSAL_TS_OUTPUT_DIR, falling back to ../ts-bindings
        let output_dir = env::var("DISPOSAL_TS_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("../ts-bindings"));

        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");

        Business::export_all_to(&output_dir).expect("Failed to export Business type");
        BusinessInput::export_all_to(&output_dir).expect("Failed to export BusinessInput type");
        BusinessResponse::export_all_to(&output_dir)
            .expect("Failed to export BusinessResponse type");

        DisposalRequest::export_all_to(&output_dir)
            .expect("Failed to export DisposalRequest type");
        DisposalRequestInput::export_all_to(&output_dir)
            .expect("Failed to export DisposalRequestInput type");
        DisposalRequestResponse::export_all_to(&output_dir)
            .expect("Failed to export DisposalRequestResponse type");

        Timeslot::export_all_to(&output_dir).expect("Failed to export Timeslot type");
        TimeslotInput::export_all_to(&output_dir).expect("Failed to export TimeslotInput type");
        TimeslotResponse::export_all_to(&output_dir)
            .expect("Failed to export TimeslotResponse type");

        ErrorResponse::export_all_to(&output_dir).expect("Failed to export ErrorResponse type");

        for file in [
            "Business.ts",
            "DisposalRequestResponse.ts",
            "TimeslotResponse.ts",
            "ErrorResponse.ts",
        ] {
            assert!(output_dir.join(file).exists(), "{} should have been generated", file);
        }
    }
}
