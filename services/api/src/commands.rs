use crate::infra::{open_candidate_service, parse_verdict};
use admissions::candidates::{
    evaluate, CandidateId, CandidateServiceError, CandidateSubmission, IntakeError, NationalId,
    Verdict,
};
use admissions::config::AppConfig;
use admissions::error::AppError;
use admissions::telemetry;
use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::json;

#[derive(Subcommand, Debug)]
pub(crate) enum CandidateCommand {
    /// Register a candidate and print the stored record with its verdict
    Register(CandidateFields),
    /// Print every stored candidate
    List,
    /// Print the candidate registered under a national id
    Find { national_id: String },
    /// Replace the fields of the candidate stored under a record id
    Update(UpdateArgs),
    /// Delete the candidate registered under a national id
    Remove { national_id: String },
    /// Show the admission verdict for a faculty and score without storing anything
    Evaluate {
        #[arg(long)]
        faculty: String,
        #[arg(long, allow_negative_numbers = true)]
        score: i32,
    },
}

#[derive(Args, Debug)]
pub(crate) struct CandidateFields {
    #[arg(long)]
    pub(crate) national_id: String,
    #[arg(long)]
    pub(crate) first_name: String,
    #[arg(long)]
    pub(crate) last_name: String,
    /// One of Ingenieria, Artes, Tecnologica, Medio_Ambiente, Ciencias
    #[arg(long)]
    pub(crate) faculty: String,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) score: String,
}

#[derive(Args, Debug)]
pub(crate) struct UpdateArgs {
    /// Store-assigned record id
    pub(crate) id: i64,
    #[command(flatten)]
    pub(crate) fields: CandidateFields,
    /// Verdict the operator expects (SI or NO); a mismatch is reported
    #[arg(long, value_parser = parse_verdict)]
    pub(crate) admitted: Option<Verdict>,
}

impl CandidateFields {
    fn into_submission(self, admitted: Option<Verdict>) -> CandidateSubmission {
        CandidateSubmission {
            national_id: self.national_id,
            first_name: self.first_name,
            last_name: self.last_name,
            faculty: self.faculty,
            score: self.score,
            admitted,
        }
    }
}

pub(crate) async fn run_candidate_command(
    database_url: Option<String>,
    command: CandidateCommand,
) -> Result<(), AppError> {
    if let CandidateCommand::Evaluate { faculty, score } = &command {
        return print_evaluation(faculty, *score);
    }

    let mut config = AppConfig::load()?;
    if let Some(url) = database_url {
        config.database.url = url;
    }
    telemetry::init(&config.telemetry)?;

    let service = open_candidate_service(&config.database).await?;

    match command {
        CandidateCommand::Register(fields) => {
            let record = service.register(fields.into_submission(None)).await?;
            print_json(&record)
        }
        CandidateCommand::List => print_json(&service.list().await?),
        CandidateCommand::Find { national_id } => {
            print_json(&service.find(&NationalId(national_id)).await?)
        }
        CandidateCommand::Update(args) => {
            let submission = args.fields.into_submission(args.admitted);
            let update = service.revise(CandidateId(args.id), submission).await?;
            print_json(&update)
        }
        CandidateCommand::Remove { national_id } => {
            let national_id = NationalId(national_id);
            service.remove(&national_id).await?;
            print_json(&json!({ "removed": national_id }))
        }
        CandidateCommand::Evaluate { faculty, score } => print_evaluation(&faculty, score),
    }
}

fn print_evaluation(faculty: &str, score: i32) -> Result<(), AppError> {
    let outcome = evaluate(faculty, score);
    let Some(verdict) = outcome.verdict() else {
        return Err(CandidateServiceError::Intake(IntakeError::UnrecognizedFaculty(
            faculty.to_string(),
        ))
        .into());
    };

    print_json(&json!({
        "faculty": faculty,
        "score": score,
        "admitted": verdict,
        "is_admitted": verdict.is_admitted(),
        "summary": outcome.summary(),
    }))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}
