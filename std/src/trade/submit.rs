use tracing::{debug, info, instrument};
use tswap_core::instruction::Instruction;

use crate::{
    err::SwapClientErr,
    ledger::{LedgerWrite, Signer},
    trade::{DepositAllArgs, DepositSingleArgs, SwapArgs, WithdrawAllArgs, WithdrawSingleArgs},
    utils::b58,
    SwapClient,
};

impl<L: LedgerWrite, S: Signer> SwapClient<L, S> {
    /// Submits `ix` alone, signed by the payer.
    /// Ledger errors are returned as-is, nothing is retried.
    async fn submit_one(
        &self,
        ix: Instruction,
    ) -> Result<L::Confirmation, SwapClientErr<L::Err>> {
        debug!(
            discm = ix.discm(),
            n_accounts = ix.accounts.len(),
            data_len = ix.data.len(),
            "built ix"
        );
        let confirmation = self
            .ledger
            .submit(std::slice::from_ref(&ix), &[&self.payer])
            .await
            .map_err(SwapClientErr::Ledger)?;
        info!("submitted");
        Ok(confirmation)
    }

    #[instrument(skip_all, fields(swap = %b58(&self.swap)))]
    pub async fn swap(&self, args: &SwapArgs) -> Result<L::Confirmation, SwapClientErr<L::Err>> {
        self.submit_one(self.swap_ix(args)?).await
    }

    #[instrument(skip_all, fields(swap = %b58(&self.swap)))]
    pub async fn deposit_all_token_types(
        &self,
        args: &DepositAllArgs,
    ) -> Result<L::Confirmation, SwapClientErr<L::Err>> {
        self.submit_one(self.deposit_all_token_types_ix(args)?).await
    }

    #[instrument(skip_all, fields(swap = %b58(&self.swap)))]
    pub async fn withdraw_all_token_types(
        &self,
        args: &WithdrawAllArgs,
    ) -> Result<L::Confirmation, SwapClientErr<L::Err>> {
        self.submit_one(self.withdraw_all_token_types_ix(args)?).await
    }

    #[instrument(skip_all, fields(swap = %b58(&self.swap)))]
    pub async fn deposit_single_token_type_exact_amount_in(
        &self,
        args: &DepositSingleArgs,
    ) -> Result<L::Confirmation, SwapClientErr<L::Err>> {
        self.submit_one(self.deposit_single_token_type_exact_amount_in_ix(args)?).await
    }

    #[instrument(skip_all, fields(swap = %b58(&self.swap)))]
    pub async fn withdraw_single_token_type_exact_amount_out(
        &self,
        args: &WithdrawSingleArgs,
    ) -> Result<L::Confirmation, SwapClientErr<L::Err>> {
        self.submit_one(self.withdraw_single_token_type_exact_amount_out_ix(args)?).await
    }
}
