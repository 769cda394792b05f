pub const LOCAL_HOST: &str = "http://localhost:8000";
pub const IC_HOST: &str = "https://ic0.app";
pub const DEFAULT_CANISTER_ID: &str = "bkyz2-fmaaa-aaaaa-qaaaq-cai";

/// Which deployment of the certificate service to target.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Network {
    /// A locally running replica.
    #[default]
    Local,
    /// The public network.
    Ic,
}

impl Network {
    pub fn default_host(self) -> &'static str {
        match self {
            Network::Local => LOCAL_HOST,
            Network::Ic => IC_HOST,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Local => write!(f, "local"),
            Network::Ic => write!(f, "ic"),
        }
    }
}

/// Location of the remote certificate service.  This is resolved and reported, but the certificate
/// registry itself never talks to the service.
#[derive(clap::Args, Clone, Debug)]
pub struct ServiceConfigArgs {
    /// Specify the network on which the certificate service is deployed.
    #[arg(
        env = "DFX_NETWORK",
        long,
        value_enum,
        value_name = "NETWORK",
        default_value_t = Network::Local
    )]
    pub network: Network,
    /// Specify the id of the certificate service's canister.
    #[arg(
        env = "CANISTER_ID_CERT_BACKEND",
        long,
        value_name = "ID",
        default_value = DEFAULT_CANISTER_ID
    )]
    pub canister_id: String,
    /// Override the host URL of the certificate service.  If unspecified, it is determined by
    /// the network ("http://localhost:8000" for local, "https://ic0.app" for ic).
    #[arg(env = "CERTGEN_SERVICE_HOST", long = "service-host", value_name = "URL")]
    pub host_o: Option<String>,
}

impl ServiceConfigArgs {
    pub fn host(&self) -> &str {
        self.host_o
            .as_deref()
            .unwrap_or_else(|| self.network.default_host())
    }
}

impl std::fmt::Display for ServiceConfigArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "network: {}, host: {}, canister id: {}",
            self.network,
            self.host(),
            self.canister_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(clap::Parser)]
    struct TestArgs {
        #[command(flatten)]
        service_config_args: ServiceConfigArgs,
    }

    fn parse(arg_v: &[&str]) -> ServiceConfigArgs {
        use clap::Parser;
        TestArgs::try_parse_from(std::iter::once("test").chain(arg_v.iter().copied()))
            .expect("pass")
            .service_config_args
    }

    #[test]
    fn test_host_resolution() {
        let service_config_args = parse(&["--network", "local", "--canister-id", "abc"]);
        assert_eq!(service_config_args.host(), LOCAL_HOST);
        assert_eq!(service_config_args.canister_id, "abc");

        let service_config_args = parse(&["--network", "ic", "--canister-id", "abc"]);
        assert_eq!(service_config_args.host(), IC_HOST);

        let service_config_args = parse(&[
            "--network",
            "ic",
            "--canister-id",
            "abc",
            "--service-host",
            "http://127.0.0.1:4943",
        ]);
        assert_eq!(service_config_args.host(), "http://127.0.0.1:4943");
    }
}
