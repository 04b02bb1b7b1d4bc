use crate::cli::device::write_secret;
use crate::core::password;
use anyhow::Result;
use std::io::Write;
use zeroize::Zeroizing;

pub fn run(out: &mut impl Write) -> Result<()> {
    let pw = Zeroizing::new(password::generate_random_password()?);
    write_secret(out, &pw)
}
