use tswap_core::{
    err::EncodingErr,
    instruction::Instruction,
    instructions::{
        ag::SwapIx,
        deposit_all::{DepositAllIxArgs, DepositAllIxKeysOwned, NewDepositAllIxAccsBuilder},
        deposit_single::{
            DepositSingleIxArgs, DepositSingleIxKeysOwned, NewDepositSingleIxAccsBuilder,
        },
        swap::{NewSwapIxAccsBuilder, SwapIxArgs, SwapIxKeysOwned},
        withdraw_all::{NewWithdrawAllIxAccsBuilder, WithdrawAllIxArgs, WithdrawAllIxKeysOwned},
        withdraw_single::{
            NewWithdrawSingleIxAccsBuilder, WithdrawSingleIxArgs, WithdrawSingleIxKeysOwned,
        },
    },
};

use crate::{
    trade::{DepositAllArgs, DepositSingleArgs, SwapArgs, WithdrawAllArgs, WithdrawSingleArgs},
    SwapClient,
};

/// Pure builders. Nothing here touches the ledger.
impl<L, S> SwapClient<L, S> {
    // Swap

    pub fn swap_ix_keys(
        &self,
        SwapArgs {
            user_source,
            pool_source,
            pool_destination,
            user_destination,
            ..
        }: &SwapArgs,
    ) -> SwapIxKeysOwned {
        NewSwapIxAccsBuilder::start()
            .with_swap(self.swap)
            .with_authority(self.authority)
            .with_user_source(*user_source)
            .with_pool_source(*pool_source)
            .with_pool_destination(*pool_destination)
            .with_user_destination(*user_destination)
            .with_pool_mint(self.state.token_pool)
            .with_fee_account(self.state.fee_account)
            .with_token_program(self.state.token_program_id)
            .build()
    }

    pub fn swap_ag(&self, args: &SwapArgs) -> SwapIx {
        SwapIx::Swap {
            keys: self.swap_ix_keys(args),
            host_fee_account: args.host_fee_account,
            args: SwapIxArgs {
                amount_in: args.amount_in.clone(),
                minimum_amount_out: args.minimum_amount_out.clone(),
            },
        }
    }

    #[inline]
    pub fn swap_ix(&self, args: &SwapArgs) -> Result<Instruction, EncodingErr> {
        self.swap_ag(args).to_instruction(&self.program_id)
    }

    // DepositAllTokenTypes

    pub fn deposit_all_ix_keys(
        &self,
        DepositAllArgs {
            user_account_a,
            user_account_b,
            pool_account,
            ..
        }: &DepositAllArgs,
    ) -> DepositAllIxKeysOwned {
        NewDepositAllIxAccsBuilder::start()
            .with_swap(self.swap)
            .with_authority(self.authority)
            .with_source_a(*user_account_a)
            .with_source_b(*user_account_b)
            .with_into_a(self.state.token_account_a)
            .with_into_b(self.state.token_account_b)
            .with_pool_token(self.state.token_pool)
            .with_pool_account(*pool_account)
            .with_token_program(self.state.token_program_id)
            .build()
    }

    pub fn deposit_all_ag(&self, args: &DepositAllArgs) -> SwapIx {
        SwapIx::DepositAllTokenTypes {
            keys: self.deposit_all_ix_keys(args),
            args: DepositAllIxArgs {
                pool_token_amount: args.pool_token_amount.clone(),
                maximum_token_a_amount: args.maximum_token_a_amount.clone(),
                maximum_token_b_amount: args.maximum_token_b_amount.clone(),
            },
        }
    }

    #[inline]
    pub fn deposit_all_token_types_ix(
        &self,
        args: &DepositAllArgs,
    ) -> Result<Instruction, EncodingErr> {
        self.deposit_all_ag(args).to_instruction(&self.program_id)
    }

    // WithdrawAllTokenTypes

    pub fn withdraw_all_ix_keys(
        &self,
        WithdrawAllArgs {
            user_account_a,
            user_account_b,
            pool_account,
            ..
        }: &WithdrawAllArgs,
    ) -> WithdrawAllIxKeysOwned {
        NewWithdrawAllIxAccsBuilder::start()
            .with_swap(self.swap)
            .with_authority(self.authority)
            .with_pool_mint(self.state.token_pool)
            .with_source_pool_account(*pool_account)
            .with_from_a(self.state.token_account_a)
            .with_from_b(self.state.token_account_b)
            .with_user_account_a(*user_account_a)
            .with_user_account_b(*user_account_b)
            .with_fee_account(self.state.fee_account)
            .with_token_program(self.state.token_program_id)
            .build()
    }

    pub fn withdraw_all_ag(&self, args: &WithdrawAllArgs) -> SwapIx {
        SwapIx::WithdrawAllTokenTypes {
            keys: self.withdraw_all_ix_keys(args),
            args: WithdrawAllIxArgs {
                pool_token_amount: args.pool_token_amount.clone(),
                minimum_token_a_amount: args.minimum_token_a_amount.clone(),
                minimum_token_b_amount: args.minimum_token_b_amount.clone(),
            },
        }
    }

    #[inline]
    pub fn withdraw_all_token_types_ix(
        &self,
        args: &WithdrawAllArgs,
    ) -> Result<Instruction, EncodingErr> {
        self.withdraw_all_ag(args).to_instruction(&self.program_id)
    }

    // DepositSingleTokenTypeExactAmountIn

    pub fn deposit_single_ix_keys(
        &self,
        DepositSingleArgs {
            user_account,
            pool_account,
            ..
        }: &DepositSingleArgs,
    ) -> DepositSingleIxKeysOwned {
        NewDepositSingleIxAccsBuilder::start()
            .with_swap(self.swap)
            .with_authority(self.authority)
            .with_source(*user_account)
            .with_into_a(self.state.token_account_a)
            .with_into_b(self.state.token_account_b)
            .with_pool_token(self.state.token_pool)
            .with_pool_account(*pool_account)
            .with_token_program(self.state.token_program_id)
            .build()
    }

    pub fn deposit_single_ag(&self, args: &DepositSingleArgs) -> SwapIx {
        SwapIx::DepositSingleTokenTypeExactAmountIn {
            keys: self.deposit_single_ix_keys(args),
            args: DepositSingleIxArgs {
                source_token_amount: args.source_token_amount.clone(),
                minimum_pool_token_amount: args.minimum_pool_token_amount.clone(),
            },
        }
    }

    #[inline]
    pub fn deposit_single_token_type_exact_amount_in_ix(
        &self,
        args: &DepositSingleArgs,
    ) -> Result<Instruction, EncodingErr> {
        self.deposit_single_ag(args).to_instruction(&self.program_id)
    }

    // WithdrawSingleTokenTypeExactAmountOut

    pub fn withdraw_single_ix_keys(
        &self,
        WithdrawSingleArgs {
            user_account,
            pool_account,
            ..
        }: &WithdrawSingleArgs,
    ) -> WithdrawSingleIxKeysOwned {
        NewWithdrawSingleIxAccsBuilder::start()
            .with_swap(self.swap)
            .with_authority(self.authority)
            .with_pool_mint(self.state.token_pool)
            .with_source_pool_account(*pool_account)
            .with_from_a(self.state.token_account_a)
            .with_from_b(self.state.token_account_b)
            .with_user_account(*user_account)
            .with_fee_account(self.state.fee_account)
            .with_token_program(self.state.token_program_id)
            .build()
    }

    pub fn withdraw_single_ag(&self, args: &WithdrawSingleArgs) -> SwapIx {
        SwapIx::WithdrawSingleTokenTypeExactAmountOut {
            keys: self.withdraw_single_ix_keys(args),
            args: WithdrawSingleIxArgs {
                destination_token_amount: args.destination_token_amount.clone(),
                maximum_pool_token_amount: args.maximum_pool_token_amount.clone(),
            },
        }
    }

    #[inline]
    pub fn withdraw_single_token_type_exact_amount_out_ix(
        &self,
        args: &WithdrawSingleArgs,
    ) -> Result<Instruction, EncodingErr> {
        self.withdraw_single_ag(args).to_instruction(&self.program_id)
    }
}
