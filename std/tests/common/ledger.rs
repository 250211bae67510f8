use std::{collections::HashMap, error::Error, fmt::Display, sync::Mutex};

use tswap_std::{
    instruction::Instruction,
    ledger::{Account, Ledger, LedgerRead, LedgerWrite, Signer},
};

pub const RENT_EXEMPT_LAMPORTS: u64 = 3_145_920;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MockErr(pub &'static str);

impl Display for MockErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl Error for MockErr {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ixs: Vec<Instruction>,
    pub signers: Vec<[u8; 32]>,
}

/// In-memory ledger that records every rent query and submission
#[derive(Debug, Default)]
pub struct MockLedger {
    pub accounts: HashMap<[u8; 32], Account>,
    pub fetch_err: Option<MockErr>,
    pub submit_err: Option<MockErr>,
    pub rent_queries: Mutex<Vec<usize>>,
    pub submissions: Mutex<Vec<Submission>>,
}

impl MockLedger {
    pub fn with_account(mut self, pk: [u8; 32], account: Account) -> Self {
        self.accounts.insert(pk, account);
        self
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn rent_queries(&self) -> Vec<usize> {
        self.rent_queries.lock().unwrap().clone()
    }
}

impl Ledger for MockLedger {
    type Err = MockErr;
}

impl LedgerRead for MockLedger {
    async fn get_account_info(&self, pk: &[u8; 32]) -> Result<Option<Account>, MockErr> {
        match self.fetch_err {
            Some(e) => Err(e),
            None => Ok(self.accounts.get(pk).cloned()),
        }
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, MockErr> {
        self.rent_queries.lock().unwrap().push(data_len);
        Ok(RENT_EXEMPT_LAMPORTS)
    }
}

impl LedgerWrite for MockLedger {
    /// Index of the submission
    type Confirmation = usize;

    async fn submit(
        &self,
        ixs: &[Instruction],
        signers: &[&dyn Signer],
    ) -> Result<usize, MockErr> {
        if let Some(e) = self.submit_err {
            return Err(e);
        }
        let mut subs = self.submissions.lock().unwrap();
        subs.push(Submission {
            ixs: ixs.to_vec(),
            signers: signers.iter().map(|s| s.pubkey()).collect(),
        });
        Ok(subs.len() - 1)
    }
}
