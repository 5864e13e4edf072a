use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the authorization URL to open in a browser
    Begin,

    /// Complete sign-in with a code copied from the redirect page
    Complete {
        /// Authorization code
        #[arg(long)]
        code: String,

        /// ID token delivered with the code (skips the token exchange)
        #[arg(long)]
        id_token: Option<String>,
    },

    /// Print the authorization URL, then read "<code> [id_token]" from stdin
    Wait,

    /// Show the signed-in user
    Whoami,

    /// Report whether a user is signed in
    Status,

    /// Check expiry, issuer and audience of an ID token
    Validate {
        /// Token to check (defaults to the stored ID token)
        #[arg(long)]
        id_token: Option<String>,
    },

    /// Sign out and erase stored credentials
    Logout,
}
