use std::{io, sync::Arc};

use crate::cli::io::{LineEditorPrompter, Prompter, ScriptPrompter};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::render::{self, MenuChoice};
use crate::cli::CliError;
use crate::config::{CliMode, Config};
use crate::core::{LedgerStore, SystemClock};
use crate::ledger::{parse_amount, AccountNumber};
use crate::storage::JsonSnapshotStore;
use crate::utils::build_info;

/// Loads the ledger named by the environment and runs the menu loop until exit.
pub fn run_cli() -> Result<(), CliError> {
    let config = Config::from_env();
    tracing::info!(path = %config.data_file.display(), mode = ?config.mode, "starting shell");

    let snapshots = JsonSnapshotStore::new(config.data_file.clone());
    let store = LedgerStore::open(Box::new(snapshots), Arc::new(SystemClock))?;

    match config.mode {
        CliMode::Interactive => {
            output::info(format!(
                "bank_ledger {} | {}",
                build_info::current().describe(),
                config.data_file.display()
            ));
            Shell::new(store, LineEditorPrompter::new()?).run()
        }
        CliMode::Script => {
            output::set_preferences(OutputPreferences { plain_mode: true });
            let stdin = io::stdin();
            Shell::new(store, ScriptPrompter::new(stdin.lock())).run()
        }
    }
}

/// Menu loop over a [`LedgerStore`]. Ledger errors are reported and the loop continues.
pub struct Shell<P> {
    store: LedgerStore,
    prompter: P,
}

impl<P: Prompter> Shell<P> {
    pub fn new(store: LedgerStore, prompter: P) -> Self {
        Self { store, prompter }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            output::section(render::MENU_TITLE);
            for line in render::menu_lines() {
                output::detail(line);
            }

            let choice = match self.prompter.read_line("Enter your choice:")? {
                Some(choice) => choice,
                None => break,
            };
            let Some(choice) = MenuChoice::parse(&choice) else {
                output::warning(render::INVALID_CHOICE);
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(CliError::InputClosed) => break,
                Err(CliError::Ledger(err)) => output::error(err),
                Err(err) => return Err(err),
            }
        }
        output::info(render::GOODBYE);
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), CliError> {
        match choice {
            MenuChoice::CreateAccount => self.create_account(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::Transfer => self.transfer(),
            MenuChoice::Statement => self.statement(),
            MenuChoice::ListAccounts => {
                self.list_accounts();
                Ok(())
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn create_account(&mut self) -> Result<(), CliError> {
        let name = self.ask("Enter your name:")?;
        let initial_balance = parse_amount(&self.ask("Enter initial balance:")?)?;
        let summary = self.store.create_account(name, initial_balance)?;
        output::success(render::account_created(&summary));
        Ok(())
    }

    fn deposit(&mut self) -> Result<(), CliError> {
        let Some(number) = self.ask_account("Enter account number:", "Account")? else {
            return Ok(());
        };
        let amount = parse_amount(&self.ask("Enter deposit amount:")?)?;
        let balance = self.store.deposit(number, amount)?;
        output::success(render::deposited(number, amount, balance));
        Ok(())
    }

    fn withdraw(&mut self) -> Result<(), CliError> {
        let Some(number) = self.ask_account("Enter account number:", "Account")? else {
            return Ok(());
        };
        let amount = parse_amount(&self.ask("Enter withdrawal amount:")?)?;
        let balance = self.store.withdraw(number, amount)?;
        output::success(render::withdrawn(number, amount, balance));
        Ok(())
    }

    fn transfer(&mut self) -> Result<(), CliError> {
        let Some(sender) = self.ask_account("Enter sender's account number:", "Sender account")?
        else {
            return Ok(());
        };
        let Some(receiver) =
            self.ask_account("Enter receiver's account number:", "Receiver account")?
        else {
            return Ok(());
        };
        let amount = parse_amount(&self.ask("Enter transfer amount:")?)?;
        let receipt = self.store.transfer(sender, receiver, amount)?;
        output::success(render::transferred(&receipt));
        Ok(())
    }

    fn statement(&mut self) -> Result<(), CliError> {
        let Some(number) = self.ask_account("Enter account number:", "Account")? else {
            return Ok(());
        };
        let statement = self.store.statement(number)?;
        for line in render::statement_lines(&statement) {
            output::detail(line);
        }
        Ok(())
    }

    fn list_accounts(&self) {
        output::info("All Accounts:");
        for line in render::account_list_lines(&self.store.list_accounts()) {
            output::detail(line);
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        self.prompter
            .read_line(prompt)?
            .ok_or(CliError::InputClosed)
    }

    /// Asks for an account number and checks it exists, reporting `<role> not found.` otherwise.
    fn ask_account(&mut self, prompt: &str, role: &str) -> Result<Option<AccountNumber>, CliError> {
        let raw = self.ask(prompt)?;
        let Ok(number) = raw.parse::<AccountNumber>() else {
            output::error(format!("`{}` is not a valid account number.", raw.trim()));
            return Ok(None);
        };
        if self.store.account(number).is_none() {
            output::error(format!("{role} not found."));
            return Ok(None);
        }
        Ok(Some(number))
    }
}
