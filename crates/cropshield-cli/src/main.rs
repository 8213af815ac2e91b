//! CropShield CLI
//!
//! Thin wrapper around cropshield-core for command-line usage. Each command
//! sends one request; the session, a pending verification and the last claim
//! are kept in the data directory so commands chain like pages do.
//!
//! ## Usage
//!
//! ```bash
//! # Register a farmer with identity photos
//! cropshield register --name "Ravi Kumar" --mobile 9876543210 --aadhaar 123412341234 \
//!     --gov-id aadhaar.png --selfie me.jpg
//!
//! # Verify with the OTP from registration (defaults to the pending one)
//! cropshield verify
//!
//! # Log in and list lands
//! cropshield login HBL-2025-3F9A1C
//! cropshield land list
//!
//! # Register a parcel
//! cropshield land add --name "river plot" --crop Rice --size 2.5 --lat 12.97 --lon 77.59
//!
//! # File a claim and show the payout
//! cropshield claim submit --land 11 --ndvi 0.42 --rainfall 12 --expected-yield 3.1
//! cropshield payout
//! cropshield claim status
//! ```

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cropshield_core::{
    AccountRegistration, ApiClient, Attachment, ClaimId, ClaimRequest, ClientConfig, CropType,
    Credentials, FarmerId, GeoLocation, LandForm, LandId, Model1Inputs, Model2Inputs, NewLand,
    OtpVerification, PayoutSummary, PendingVerification, RegistrationForm, RegistrationNo,
    SessionStore, WalletAddress, WalletConnector,
};

/// CropShield - crop-insurance claims
#[derive(Parser)]
#[command(name = "cropshield")]
#[command(version = "0.1.0")]
#[command(about = "CropShield - register land and file crop-insurance claims")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: ~/.cropshield)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Claim service base URL (overrides CROPSHIELD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a farmer (multipart, with optional identity photos)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        mobile: String,
        #[arg(long)]
        aadhaar: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Payout wallet address
        #[arg(long, default_value = "")]
        wallet: String,
        /// Government ID photo (PNG or JPEG)
        #[arg(long)]
        gov_id: Option<PathBuf>,
        /// Selfie (PNG or JPEG)
        #[arg(long)]
        selfie: Option<PathBuf>,
    },

    /// Register an email/password account
    RegisterAccount {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "")]
        wallet: String,
    },

    /// Verify a registration with its OTP
    Verify {
        /// Defaults to the pending registration
        #[arg(long)]
        registration_no: Option<String>,
        /// Defaults to the OTP returned at registration
        #[arg(long)]
        otp: Option<String>,
    },

    /// Log in by registration number, or by email and password
    Login {
        /// Defaults to the pending registration
        registration_no: Option<String>,
        #[arg(long, requires = "password", conflicts_with = "registration_no")]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in farmer
    Whoami,

    /// Land management
    Land {
        #[command(subcommand)]
        action: LandAction,
    },

    /// Claim submission and status
    Claim {
        #[command(subcommand)]
        action: ClaimAction,
    },

    /// Show the payout for the last claim
    Payout,

    /// Wallet provider
    Wallet {
        #[command(subcommand)]
        action: WalletAction,
    },

    /// Check that the service is up
    Health,

    /// Operator actions on the insurance pool
    Oracle {
        #[command(subcommand)]
        action: OracleAction,
    },
}

#[derive(Subcommand)]
enum LandAction {
    /// Register a parcel (multipart, with optional image and location)
    Add {
        /// Defaults to the logged-in farmer
        #[arg(long)]
        registration_no: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "Wheat")]
        crop: CropType,
        /// Size in acres
        #[arg(long)]
        size: Option<f64>,
        #[arg(long, default_value_t = 1)]
        plots: u32,
        /// Verification image (PNG or JPEG)
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Quick-add a parcel for the logged-in farmer
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "Wheat")]
        crop: CropType,
        #[arg(long, default_value = "")]
        location: String,
    },

    /// List a farmer's parcels
    List {
        /// Defaults to the logged-in farmer
        #[arg(long)]
        farmer_id: Option<i64>,
    },
}

#[derive(Subcommand)]
enum ClaimAction {
    /// Submit a claim for one land
    Submit {
        #[arg(long)]
        land: i64,
        /// Claim by registration number instead of the session
        #[arg(long)]
        registration_no: Option<String>,
        #[command(flatten)]
        model1: Model1Args,
        #[command(flatten)]
        model2: Model2Args,
    },

    /// On-chain status of a claim's oracle transaction
    Status {
        /// Defaults to the last claim
        claim_id: Option<i64>,
    },
}

#[derive(Subcommand)]
enum WalletAction {
    /// Request an account from the wallet provider
    Connect {
        /// Provider JSON-RPC endpoint (overrides CROPSHIELD_WALLET_RPC)
        #[arg(long)]
        rpc: Option<String>,
    },
}

#[derive(Subcommand)]
enum OracleAction {
    /// Allow an address to post oracle data
    Authorize { address: String },
}

/// Stress-model readings. Omitted flags are left to the service defaults.
#[derive(Args)]
struct Model1Args {
    #[arg(long, allow_hyphen_values = true)]
    ndvi: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    savi: Option<f64>,
    #[arg(long)]
    chlorophyll: Option<f64>,
    /// Leaf area index
    #[arg(long)]
    lai: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    temperature: Option<f64>,
    #[arg(long)]
    humidity: Option<f64>,
    #[arg(long)]
    rainfall: Option<f64>,
    #[arg(long)]
    soil_moisture: Option<f64>,
}

impl From<Model1Args> for Model1Inputs {
    fn from(a: Model1Args) -> Self {
        Model1Inputs {
            ndvi: a.ndvi,
            savi: a.savi,
            chlorophyll_content: a.chlorophyll,
            leaf_area_index: a.lai,
            temperature: a.temperature,
            humidity: a.humidity,
            rainfall: a.rainfall,
            soil_moisture: a.soil_moisture,
        }
    }
}

/// Payout-model readings.
#[derive(Args)]
struct Model2Args {
    #[arg(long)]
    expected_yield: Option<f64>,
    #[arg(long)]
    stress_indicator: Option<f64>,
    #[arg(long)]
    canopy_coverage: Option<f64>,
    #[arg(long)]
    pest_damage: Option<f64>,
    /// Leaf area index for the payout model
    #[arg(long)]
    model2_lai: Option<f64>,
    /// Overrides the land's crop
    #[arg(long)]
    crop: Option<CropType>,
}

impl From<Model2Args> for Model2Inputs {
    fn from(a: Model2Args) -> Self {
        Model2Inputs {
            expected_yield: a.expected_yield,
            crop_stress_indicator: a.stress_indicator,
            canopy_coverage: a.canopy_coverage,
            pest_damage: a.pest_damage,
            leaf_area_index: a.model2_lai,
            crop_type: a.crop,
        }
    }
}

/// Get the default data directory (~/.cropshield)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cropshield")
}

fn open_store(data_dir: &Path) -> Result<SessionStore> {
    SessionStore::open(data_dir.join("state.redb"))
        .with_context(|| format!("failed to open state in {}", data_dir.display()))
}

fn load_attachment(path: Option<PathBuf>) -> Result<Option<Attachment>> {
    path.map(|p| {
        Attachment::from_path(&p).with_context(|| format!("cannot attach {}", p.display()))
    })
    .transpose()
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    cropshield_core::logging::init(cli.verbose);

    let mut cfg = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        cfg = cfg.with_base_url(url);
    }
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = open_store(&data_dir)?;
    tracing::debug!("data dir {}, service {}", data_dir.display(), cfg.base_url);
    let api = ApiClient::new(cfg.clone())?;

    match cli.command {
        Commands::Register {
            name,
            mobile,
            aadhaar,
            email,
            wallet,
            gov_id,
            selfie,
        } => {
            let form = RegistrationForm {
                name,
                mobile,
                aadhaar,
                email,
                wallet_address: wallet,
                gov_id: load_attachment(gov_id)?,
                selfie: load_attachment(selfie)?,
            };
            let registration = api.register(&form).await?;
            store.save_pending_verification(&PendingVerification::from(&registration))?;

            println!("Registered: {}", registration.registration_no);
            if let Some(ref otp) = registration.otp {
                println!("OTP: {}", otp);
            }
            if let Some(ref note) = registration.note {
                println!("Note: {}", note);
            }
            println!("Next: cropshield verify");
        }

        Commands::RegisterAccount {
            name,
            email,
            password,
            wallet,
        } => {
            let body = AccountRegistration {
                name,
                email,
                password,
                wallet_address: wallet,
            };
            let registration = api.register_account(&body).await?;
            store.save_pending_verification(&PendingVerification::from(&registration))?;

            println!("Registered: {}", registration.registration_no);
            if let Some(ref otp) = registration.otp {
                println!("OTP: {}", otp);
            }
        }

        Commands::Verify {
            registration_no,
            otp,
        } => {
            let pending = store.load_pending_verification()?;
            let registration_no = registration_no
                .map(RegistrationNo::new)
                .or_else(|| pending.as_ref().map(|p| p.registration_no.clone()))
                .filter(|r| !r.is_empty())
                .ok_or_else(|| {
                    anyhow!("No pending registration; run `cropshield register` first")
                })?;
            // A stored OTP only belongs to its own registration
            let otp = otp
                .or_else(|| {
                    pending
                        .filter(|p| p.registration_no == registration_no)
                        .and_then(|p| p.otp)
                })
                .ok_or_else(|| anyhow!("No OTP given; pass --otp"))?;

            let outcome = api
                .verify_otp(&OtpVerification {
                    registration_no: registration_no.clone(),
                    otp: otp.trim().to_string(),
                })
                .await?;
            if !outcome.verified {
                bail!("OTP not verified");
            }
            println!("Verified {}", registration_no);
            println!("Next: cropshield login {}", registration_no);
        }

        Commands::Login {
            registration_no,
            email,
            password,
        } => {
            let credentials = match (email, password) {
                (Some(email), Some(password)) => Credentials::email(email, password),
                _ => {
                    let reg = registration_no
                        .map(RegistrationNo::new)
                        .or(store.load_pending_verification()?.map(|p| p.registration_no))
                        .filter(|r| !r.is_empty())
                        .ok_or_else(|| anyhow!("Give a registration number to log in"))?;
                    Credentials::registration(reg)
                }
            };

            let session = api.login(&credentials).await?;
            store.save_session(&session)?;

            println!(
                "Logged in as {} (farmer #{})",
                session.display_name(),
                session.farmer_id
            );
            for land in &session.lands {
                println!("  {}  {} — {}", land.id, land.land_name, land.crop_type);
            }
        }

        Commands::Logout => {
            store.clear_session()?;
            println!("Logged out");
        }

        Commands::Whoami => match store.load_session()? {
            Some(session) => {
                println!("Farmer #{}: {}", session.farmer_id, session.display_name());
                if let Some(ref reg) = session.registration_no {
                    println!("Registration: {}", reg);
                }
                if let Some(ref wallet) = session.wallet_address {
                    println!("Wallet: {}", wallet);
                }
            }
            None => println!("Not logged in"),
        },

        Commands::Land { action } => match action {
            LandAction::Add {
                registration_no,
                name,
                crop,
                size,
                plots,
                image,
                lat,
                lon,
            } => {
                let registration_no = registration_no
                    .map(RegistrationNo::new)
                    .or(store.load_session()?.and_then(|s| s.registration_no))
                    .filter(|r| !r.is_empty())
                    .ok_or_else(|| anyhow!("Give --registration-no or log in first"))?;
                let geo = match (lat, lon) {
                    (Some(lat), Some(lon)) => {
                        Some(GeoLocation::new(lat, lon).map_err(|e| anyhow!(e))?)
                    }
                    _ => None,
                };

                let form = LandForm {
                    registration_no,
                    land_name: name,
                    size_acres: size,
                    crop_type: crop,
                    plots_count: plots,
                    verification_image: load_attachment(image)?,
                    geo,
                };
                let added = api.add_land(&form).await?;
                println!("Added: {}", serde_json::to_string(&added)?);
            }

            LandAction::Create {
                name,
                crop,
                location,
            } => {
                let session = store
                    .load_session()?
                    .ok_or_else(|| anyhow!("Not logged in; run `cropshield login` first"))?;
                let created = api
                    .create_land(&NewLand {
                        farmer_id: session.farmer_id,
                        land_name: name,
                        crop_type: crop,
                        location,
                    })
                    .await?;
                println!("Added: {}", serde_json::to_string(&created)?);
            }

            LandAction::List { farmer_id } => {
                let farmer_id = match farmer_id {
                    Some(id) => FarmerId(id),
                    None => {
                        store
                            .load_session()?
                            .ok_or_else(|| anyhow!("Not logged in; pass --farmer-id"))?
                            .farmer_id
                    }
                };
                let lands = api.list_lands(farmer_id).await?;
                if lands.is_empty() {
                    println!("No lands for farmer #{}", farmer_id);
                } else {
                    println!("Lands ({}):", lands.len());
                    for land in &lands {
                        match land.location() {
                            Some(geo) => println!("  {}  {}  ({})", land.id, land.label(), geo),
                            None => println!("  {}  {}", land.id, land.label()),
                        }
                    }
                }
            }
        },

        Commands::Claim { action } => match action {
            ClaimAction::Submit {
                land,
                registration_no,
                model1,
                model2,
            } => {
                let land_id = LandId(land);
                let request = match (registration_no, store.load_session()?) {
                    (Some(reg), _) => ClaimRequest::for_registration(
                        RegistrationNo::new(reg),
                        land_id,
                        model1.into(),
                        model2.into(),
                    ),
                    (None, Some(session)) => {
                        ClaimRequest::for_session(&session, land_id, model1.into(), model2.into())
                    }
                    (None, None) => bail!("Not logged in; run `cropshield login` first"),
                };

                let result = api.submit_claim(&request).await?;
                store.save_last_claim(&result)?;

                for line in PayoutSummary::new(&result, &cfg).lines() {
                    println!("{}", line);
                }
            }

            ClaimAction::Status { claim_id } => {
                let claim_id = match claim_id {
                    Some(id) => ClaimId(id),
                    None => {
                        store
                            .load_last_claim()?
                            .ok_or_else(|| anyhow!("No claim yet; pass a claim id"))?
                            .claim_id
                    }
                };
                let status = api.tx_status(claim_id).await?;
                print_json(&status)?;
                println!("State: {:?}", status.state());
            }
        },

        Commands::Payout => match store.load_last_claim()? {
            Some(result) => {
                for line in PayoutSummary::new(&result, &cfg).lines() {
                    println!("{}", line);
                }
            }
            None => println!("No result"),
        },

        Commands::Wallet { action } => match action {
            WalletAction::Connect { rpc } => {
                let wallet = WalletConnector::new(rpc.unwrap_or(cfg.wallet_rpc_url))?;
                let address = wallet.connect().await?;
                println!("Wallet: {}", address);
            }
        },

        Commands::Health => {
            let health = api.health().await?;
            println!("Service: {}", cfg.base_url);
            print_json(&health)?;
        }

        Commands::Oracle { action } => match action {
            OracleAction::Authorize { address } => {
                let address = WalletAddress::parse(&address)?;
                let out = api.authorize_oracle(&address).await?;
                println!("Authorized {}", address);
                print_json(&out)?;
            }
        },
    }

    Ok(())
}
