use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use client::{
    ApiClient, Config, Dashboard, HackathonCard, HackathonForm, Notices, ProfileForm,
    PublicProfileView, public_profile_url,
};
use domain::dto::{HackathonDraft, LoginRequest, RegisterRequest, UpdateProfileRequest};
use domain::{DomainError, HackathonStatus, TeamType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use validator::Validate;

#[derive(Parser)]
#[command(name = "hacktracker")]
#[command(about = "Track the hackathons you apply to and share them", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "HACKTRACKER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "HACKTRACKER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    /// Update the signed-in user's profile
    Profile {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        linkedin: Option<String>,
    },
    /// List your hackathons
    List,
    Add {
        #[command(flatten)]
        fields: HackathonFields,
    },
    Update {
        id: String,

        #[command(flatten)]
        fields: HackathonFields,
    },
    /// Show someone's public profile
    Public { username: String },
    /// Print the shareable public profile link
    Link {
        username: String,

        #[arg(long, env = "HACKTRACKER_APP_URL", default_value = "http://localhost:5173")]
        origin: String,
    },
}

#[derive(Args)]
struct HackathonFields {
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    organization: Option<String>,

    #[arg(long)]
    link: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    applied: Option<String>,

    /// Application deadline, YYYY-MM-DD
    #[arg(long)]
    deadline: Option<String>,

    /// Submission deadline, YYYY-MM-DD
    #[arg(long)]
    submit_by: Option<String>,

    #[arg(long)]
    status: Option<HackathonStatus>,

    #[arg(long)]
    team: Option<TeamType>,

    #[arg(long)]
    project: Option<String>,

    #[arg(long)]
    github: Option<String>,

    #[arg(long)]
    certificate: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Repeatable; a comma separated list also works
    #[arg(long = "tech")]
    tech: Vec<String>,
}

impl HackathonFields {
    /// Writes every provided field over the draft, leaving the rest as they are.
    fn apply(self, form: &mut HackathonForm) {
        let draft: &mut HackathonDraft = form.draft_mut();
        let assign = |slot: &mut String, value: Option<String>| {
            if let Some(value) = value {
                *slot = value;
            }
        };

        assign(&mut draft.hack_name, self.name);
        assign(&mut draft.organization, self.organization);
        assign(&mut draft.official_link, self.link);
        assign(&mut draft.applied_date, self.applied);
        assign(&mut draft.last_date_to_apply, self.deadline);
        assign(&mut draft.last_date_to_submit, self.submit_by);
        assign(&mut draft.project_link, self.project);
        assign(&mut draft.github_link, self.github);
        assign(&mut draft.certificate_url, self.certificate);
        assign(&mut draft.description, self.description);
        if let Some(status) = self.status {
            draft.status = status;
        }
        if let Some(team) = self.team {
            draft.team_type = team;
        }

        for entry in self.tech.iter().flat_map(|t| t.split(',')) {
            form.add_tech(entry);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("hacktracker={},client={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Commands::Link { username, origin } = &cli.command {
        println!("{}", public_profile_url(origin, username));
        return Ok(());
    }

    let config = Config::from_env()?;
    let mut api = ApiClient::from_config(&config).context("Failed to set up the API client")?;

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
        } => {
            let request = RegisterRequest::new(username, email, password);
            request.validate().map_err(DomainError::from)?;
            let auth = api.register(&request).await?;
            println!("✓ Registered as {}", auth.user.display_name());
        }
        Commands::Login { email, password } => {
            let request = LoginRequest::new(email, password);
            request.validate().map_err(DomainError::from)?;
            let auth = api.login(&request).await?;
            println!("✓ Logged in as {}", auth.user.display_name());
        }
        Commands::Logout => {
            api.logout()?;
            println!("✓ Logged out");
        }
        Commands::Profile {
            username,
            email,
            bio,
            github,
            linkedin,
        } => {
            let mut form = ProfileForm::new(UpdateProfileRequest {
                username,
                email,
                bio,
                github_link: github,
                linkedin_link: linkedin,
            });
            let mut notices = Notices::default();
            let result = form.submit(&mut api, &mut notices).await;
            print_notices(&mut notices);
            result?;
        }
        Commands::List => handle_list(&api).await?,
        Commands::Add { fields } => {
            let mut dashboard = Dashboard::new();
            let mut form = HackathonForm::new();
            fields.apply(&mut form);

            dashboard.open_new_form();
            let result = form.submit(&mut dashboard, &api).await;
            print_notices(dashboard.notices_mut());
            result?;
        }
        Commands::Update { id, fields } => handle_update(&api, &id, fields).await?,
        Commands::Public { username } => {
            let view = PublicProfileView::load(&api, &username).await;
            println!("{}", view.render());
            if !matches!(view, PublicProfileView::Loaded { .. }) {
                bail!("Could not show profile for {}", username);
            }
        }
        Commands::Link { .. } => {}
    }

    Ok(())
}

async fn handle_list(api: &ApiClient) -> Result<()> {
    let mut dashboard = Dashboard::new();
    let result = dashboard.load(api).await;
    print_notices(dashboard.notices_mut());
    result?;

    if dashboard.hackathons().is_empty() {
        println!("No hackathons yet. Add one with `hacktracker add`.");
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    for hackathon in dashboard.hackathons() {
        println!("{}\n", HackathonCard::new(hackathon, today));
    }
    tracing::debug!("Listed {} hackathons", dashboard.hackathons().len());

    Ok(())
}

async fn handle_update(api: &ApiClient, id: &str, fields: HackathonFields) -> Result<()> {
    let mut dashboard = Dashboard::new();
    let loaded = dashboard.load(api).await;
    print_notices(dashboard.notices_mut());
    loaded?;

    let Some(existing) = dashboard.find(id).cloned() else {
        bail!("No hackathon with id {}", id);
    };

    let mut form = HackathonForm::for_hackathon(&existing);
    fields.apply(&mut form);
    dashboard.begin_edit(existing);

    let result = form.submit(&mut dashboard, api).await;
    print_notices(dashboard.notices_mut());
    if let Some(updated) = result? {
        let today = chrono::Local::now().date_naive();
        println!("{}", HackathonCard::new(&updated, today));
    }

    Ok(())
}

fn print_notices(notices: &mut Notices) {
    for notice in notices.drain() {
        if notice.is_error() {
            eprintln!("{}", notice);
        } else {
            println!("{}", notice);
        }
    }
}
