use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use linarqa::modules::balance::{BalanceService, BalanceSources};
use linarqa::modules::courses::CourseService;
use linarqa::modules::payments::{PaymentService, group_by_month};
use linarqa::modules::staff::StaffService;
use linarqa::modules::students::StudentService;
use linarqa::validator::validate_params;
use linarqa_cli::generator::{GenerateConfig, generate_dataset, write_dataset};
use linarqa_cli::loader::load_collection;
use linarqa_cli::render::{
    BalanceReport, BalanceView, CoursesReport, PaymentsReport, StaffReport, StudentsReport,
    payment_history, render_balance, render_courses, render_payments, render_staff,
    render_students, to_json,
};
use linarqa_config::ReportConfig;
use linarqa_core::MonthKey;
use linarqa_models::{
    Course, CourseFilterParams, CourseId, CourseStatusFilter, Enrollment, Payment,
    PaymentFilterParams, PaymentStatus, StaffFilterParams, StaffMember, StaffType, Student,
    StudentFilterParams, StudentId, StudentStatus,
};
use linarqa_observability::init_basic_console_logging;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Parser)]
#[command(name = "linarqa-cli")]
#[command(about = "Linarqa CLI - Reports over exported school data", long_about = None)]
struct Cli {
    /// Print the derived value as pretty JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Course occupancy and expected revenue
    Courses {
        /// Courses export (bare array or paging envelope)
        #[arg(long)]
        courses: PathBuf,

        /// Enrollments export
        #[arg(long)]
        enrollments: PathBuf,

        /// Matched against title, instructor and description
        #[arg(short = 's', long)]
        search: Option<String>,

        /// all, active, full or available
        #[arg(long, value_parser = parse_course_status)]
        status: Option<CourseStatusFilter>,
    },
    /// Payment statistics and monthly history
    Payments {
        /// Payments export
        #[arg(long)]
        payments: PathBuf,

        /// UNPAID, PAID, PARTIAL or OVERDUE
        #[arg(long, value_parser = parse_variant::<PaymentStatus>)]
        status: Option<PaymentStatus>,

        #[arg(long)]
        student: Option<String>,

        #[arg(long)]
        course: Option<String>,

        /// Due month, YYYY-MM
        #[arg(long)]
        month: Option<MonthKey>,

        /// Reference date for overdue bills, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Student list with head counts
    Students {
        /// Students export
        #[arg(long)]
        students: PathBuf,

        /// Matched against Latin and Arabic names
        #[arg(short = 's', long)]
        search: Option<String>,

        /// ACTIVE, INACTIVE or LEFT
        #[arg(long, value_parser = parse_variant::<StudentStatus>)]
        status: Option<StudentStatus>,
    },
    /// Personnel list with salary totals
    Staff {
        /// Staff export
        #[arg(long)]
        staff: PathBuf,

        /// Matched against names, identity number and phone
        #[arg(short = 's', long)]
        search: Option<String>,

        /// ASSISTANT, EDUCATRICE or AIDE_EDUCATRICE
        #[arg(long = "type", value_parser = parse_variant::<StaffType>)]
        staff_type: Option<StaffType>,

        #[arg(long)]
        active: Option<bool>,
    },
    /// Monthly or yearly income, salaries and net result
    Balance {
        /// Kindergarten payments export
        #[arg(long)]
        kindergarten: PathBuf,

        /// Extra-course payments export
        #[arg(long)]
        extra: PathBuf,

        /// Staff export
        #[arg(long)]
        staff: PathBuf,

        #[arg(long)]
        year: i32,

        /// 1-12; the whole year when omitted
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
    /// Write a fake dataset to try the other commands on
    Generate {
        /// Output directory, relative to the data directory
        #[arg(short = 'o', long, default_value = "sample")]
        out: PathBuf,

        #[arg(long, default_value = "40")]
        students: usize,

        #[arg(long, default_value = "6")]
        courses: usize,

        #[arg(long, default_value = "8")]
        staff: usize,

        /// Year the bills are due in
        #[arg(long, default_value = "2024")]
        year: i32,
    },
}

/// Parses a backend enum name, rejecting values the models do not know.
fn parse_variant<T>(raw: &str) -> Result<T, String>
where
    T: DeserializeOwned + Serialize,
{
    let name = raw.trim().to_uppercase().replace('-', "_");
    let value: T = serde_json::from_value(serde_json::Value::String(name.clone()))
        .map_err(|e| e.to_string())?;
    match serde_json::to_value(&value) {
        Ok(serde_json::Value::String(known)) if known == name => Ok(value),
        _ => Err(format!("unknown value '{raw}'")),
    }
}

fn parse_course_status(raw: &str) -> Result<CourseStatusFilter, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_lowercase()))
        .map_err(|_| format!("unknown course status '{raw}', expected all, active, full or available"))
}

fn main() {
    dotenv().ok();
    init_basic_console_logging().ok();

    let cli = Cli::parse();
    let config = ReportConfig::from_env();

    if let Err(e) = run(cli, &config) {
        eprintln!("\n❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &ReportConfig) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Courses {
            courses,
            enrollments,
            search,
            status,
        } => handle_courses(config, json, courses, enrollments, CourseFilterParams { search, status }),
        Commands::Payments {
            payments,
            status,
            student,
            course,
            month,
            today,
        } => {
            let mut params = PaymentFilterParams {
                status,
                student_id: student.map(StudentId::new),
                course_id: course.map(CourseId::new),
                ..Default::default()
            };
            if let Some(key) = month {
                params = params.with_month(key);
            }
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            handle_payments(config, json, payments, params, today)
        }
        Commands::Students {
            students,
            search,
            status,
        } => handle_students(config, json, students, StudentFilterParams { search, status }),
        Commands::Staff {
            staff,
            search,
            staff_type,
            active,
        } => handle_staff(
            config,
            json,
            staff,
            StaffFilterParams {
                search,
                staff_type,
                active,
            },
        ),
        Commands::Balance {
            kindergarten,
            extra,
            staff,
            year,
            month,
        } => handle_balance(config, json, kindergarten, extra, staff, year, month),
        Commands::Generate {
            out,
            students,
            courses,
            staff,
            year,
        } => handle_generate(
            config,
            out,
            GenerateConfig {
                students,
                courses,
                staff,
                year,
            },
        ),
    }
}

fn output<T: Serialize>(json: bool, report: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", to_json(report)?);
    } else {
        print!("{}", text(report));
    }
    Ok(())
}

fn handle_courses(
    config: &ReportConfig,
    json: bool,
    courses_path: PathBuf,
    enrollments_path: PathBuf,
    params: CourseFilterParams,
) -> Result<()> {
    validate_params(&params).context("Invalid course filter")?;
    let courses: Vec<Course> = load_collection(config, courses_path)?;
    let enrollments: Vec<Enrollment> = load_collection(config, enrollments_path)?;

    let filtered = CourseService::filter_courses(&courses, &enrollments, &params);
    let report = CoursesReport {
        statistics: CourseService::summarize_courses(&courses, &enrollments),
        courses: CourseService::course_overviews(filtered, &enrollments),
    };
    output(json, &report, |r| render_courses(r, &config.currency))
}

fn handle_payments(
    config: &ReportConfig,
    json: bool,
    payments_path: PathBuf,
    params: PaymentFilterParams,
    today: NaiveDate,
) -> Result<()> {
    validate_params(&params).context("Invalid payment filter")?;
    let payments: Vec<Payment> = load_collection(config, payments_path)?;

    let filtered = PaymentService::filter_payments(&payments, &params);
    let buckets = group_by_month(filtered.iter().copied());
    let report = PaymentsReport {
        statistics: PaymentService::summarize_payments(filtered.iter().copied()),
        overdue_payments: PaymentService::overdue_payments(filtered.iter().copied(), today).len(),
        history: payment_history(&buckets, config.history_months),
    };
    output(json, &report, |r| render_payments(r, &config.currency))
}

fn handle_students(
    config: &ReportConfig,
    json: bool,
    students_path: PathBuf,
    params: StudentFilterParams,
) -> Result<()> {
    validate_params(&params).context("Invalid student filter")?;
    let students: Vec<Student> = load_collection(config, students_path)?;

    let report = StudentsReport {
        statistics: StudentService::summarize_students(&students),
        students: StudentService::filter_students(&students, &params),
    };
    output(json, &report, render_students)
}

fn handle_staff(
    config: &ReportConfig,
    json: bool,
    staff_path: PathBuf,
    params: StaffFilterParams,
) -> Result<()> {
    validate_params(&params).context("Invalid staff filter")?;
    let staff: Vec<StaffMember> = load_collection(config, staff_path)?;

    let report = StaffReport {
        statistics: StaffService::summarize_staff(&staff),
        staff: StaffService::filter_staff(&staff, &params),
    };
    output(json, &report, |r| render_staff(r, &config.currency))
}

fn handle_balance(
    config: &ReportConfig,
    json: bool,
    kindergarten_path: PathBuf,
    extra_path: PathBuf,
    staff_path: PathBuf,
    year: i32,
    month: Option<u32>,
) -> Result<()> {
    let kindergarten: Vec<Payment> = load_collection(config, kindergarten_path)?;
    let extra: Vec<Payment> = load_collection(config, extra_path)?;
    let staff: Vec<StaffMember> = load_collection(config, staff_path)?;

    let sources = BalanceSources {
        kindergarten_payments: &kindergarten,
        extra_course_payments: &extra,
        staff: &staff,
    };
    let balance = match month {
        Some(month) => {
            let Some(key) = MonthKey::new(year, month) else {
                bail!("month must be between 1 and 12, got {month}");
            };
            BalanceView::Monthly(BalanceService::monthly_balance(key, &sources))
        }
        None => BalanceView::Yearly(BalanceService::yearly_balance(year, &sources)),
    };
    let report = BalanceReport {
        balance,
        pending: PaymentService::pending_summary(&kindergarten, &extra),
    };
    output(json, &report, |r| render_balance(r, &config.currency))
}

fn handle_generate(config: &ReportConfig, out: PathBuf, generate: GenerateConfig) -> Result<()> {
    let dir = config.resolve(out);
    let dataset = generate_dataset(&generate);
    let paths = write_dataset(&dir, &dataset)?;

    println!("✅ Wrote {} files to {}", paths.len(), dir.display());
    for path in paths {
        println!("   {}", path.display());
    }
    Ok(())
}
