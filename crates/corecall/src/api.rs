//! Typed surface over the RPC core: one method per remote procedure.
//!
//! Every wrapper is a pure mapping of its documented parameters into the
//! positional `params` array; nothing here inspects results or
//! special-cases the outcome resolution. Unset optional parameters are
//! sent as JSON `null` in their positional slot.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::Error;

/// Bitcoin Core JSON-RPC surface.
///
/// `call` is the single required method; every remote procedure is a
/// default method that fixes the procedure name and parameter shape and
/// delegates to it. The HTTP client implements `call`; test doubles do the
/// same and inherit the full surface. Results come back as opaque
/// [`Value`]s, decoded by the caller where concrete fields are needed.
#[async_trait]
pub trait CoreRpc: Send + Sync {
    /// Issue a raw JSON-RPC call.
    ///
    /// `params` is positional and order-significant. `id` is the caller's
    /// correlation string, echoed back by the server.
    async fn call(&self, method: &str, params: Vec<Value>, id: &str) -> Result<Value, Error>;

    // ==========================================================================
    // Blockchain
    // ==========================================================================

    /// Header hash of the most recent block on the best block chain.
    async fn get_best_block_hash(&self, id: &str) -> Result<Value, Error> {
        self.call("getbestblockhash", Vec::new(), id).await
    }

    /// Fetch a block by header hash. `verbosity` 0 returns serialized hex,
    /// 1 (the node default) a decoded object, 2 decoded with full
    /// transactions.
    async fn get_block(
        &self,
        block_hash: &str,
        verbosity: Option<u64>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("getblock", vec![json!(block_hash), json!(verbosity)], id)
            .await
    }

    /// Current state of the block chain: network name, height, pruning
    /// status and friends.
    async fn get_blockchain_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getblockchaininfo", Vec::new(), id).await
    }

    /// Number of blocks in the local best block chain.
    async fn get_block_count(&self, id: &str) -> Result<Value, Error> {
        self.call("getblockcount", Vec::new(), id).await
    }

    /// Header hash of the block at the given height in the best chain.
    /// The hardcoded genesis block is height 0.
    async fn get_block_hash(&self, height: u64, id: &str) -> Result<Value, Error> {
        self.call("getblockhash", vec![json!(height)], id).await
    }

    async fn get_block_header(
        &self,
        block_hash: &str,
        verbose: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "getblockheader",
            vec![json!(block_hash), json!(verbose)],
            id,
        )
        .await
    }

    /// All known chain tips: the best chain plus orphaned branches.
    async fn get_chain_tips(&self, id: &str) -> Result<Value, Error> {
        self.call("getchaintips", Vec::new(), id).await
    }

    async fn get_difficulty(&self, id: &str) -> Result<Value, Error> {
        self.call("getdifficulty", Vec::new(), id).await
    }

    /// In-mempool ancestors of a mempool transaction.
    async fn get_mempool_ancestors(
        &self,
        txid: &str,
        verbose: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("getmempoolancestors", vec![json!(txid), json!(verbose)], id)
            .await
    }

    /// In-mempool descendants of a mempool transaction.
    async fn get_mempool_descendants(
        &self,
        txid: &str,
        verbose: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "getmempooldescendants",
            vec![json!(txid), json!(verbose)],
            id,
        )
        .await
    }

    async fn get_mempool_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getmempoolinfo", Vec::new(), id).await
    }

    async fn get_raw_mempool(&self, verbose: Option<bool>, id: &str) -> Result<Value, Error> {
        self.call("getrawmempool", vec![json!(verbose)], id).await
    }

    /// Details of an unspent transaction output, or `null` when the output
    /// is spent or unknown.
    async fn get_tx_out(
        &self,
        txid: &str,
        vout: u32,
        include_mempool: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "gettxout",
            vec![json!(txid), json!(vout), json!(include_mempool)],
            id,
        )
        .await
    }

    /// Hex-encoded proof that the given transactions are in a block.
    async fn get_tx_out_proof(
        &self,
        txids: &[&str],
        block_hash: Option<&str>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("gettxoutproof", vec![json!(txids), json!(block_hash)], id)
            .await
    }

    /// Statistics about the unspent transaction output set. May take a
    /// while on a full node.
    async fn get_tx_out_set_info(&self, id: &str) -> Result<Value, Error> {
        self.call("gettxoutsetinfo", Vec::new(), id).await
    }

    /// Treat the given block as if it were received before others with the
    /// same work.
    async fn precious_block(&self, block_hash: &str, id: &str) -> Result<Value, Error> {
        self.call("preciousblock", vec![json!(block_hash)], id).await
    }

    /// Prune the block store up to the given height.
    async fn prune_blockchain(&self, height: u64, id: &str) -> Result<Value, Error> {
        self.call("pruneblockchain", vec![json!(height)], id).await
    }

    /// Verify the block chain database. `check_level` is 0-4; `nblocks` 0
    /// means all blocks.
    async fn verify_chain(
        &self,
        check_level: u32,
        nblocks: u32,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("verifychain", vec![json!(check_level), json!(nblocks)], id)
            .await
    }

    async fn verify_tx_out_proof(&self, proof: &str, id: &str) -> Result<Value, Error> {
        self.call("verifytxoutproof", vec![json!(proof)], id).await
    }

    // ==========================================================================
    // Control
    // ==========================================================================

    async fn get_memory_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getmemoryinfo", Vec::new(), id).await
    }

    /// Help text for all commands, or for one command when given.
    async fn help(&self, command: Option<&str>, id: &str) -> Result<Value, Error> {
        self.call("help", vec![json!(command)], id).await
    }

    /// Ask the node to shut down.
    async fn stop(&self, id: &str) -> Result<Value, Error> {
        self.call("stop", Vec::new(), id).await
    }

    /// Node uptime in seconds.
    async fn uptime(&self, id: &str) -> Result<Value, Error> {
        self.call("uptime", Vec::new(), id).await
    }

    // ==========================================================================
    // Generating (regtest)
    // ==========================================================================

    /// Mine blocks immediately to an address in the wallet.
    async fn generate(
        &self,
        nblocks: u64,
        maxtries: Option<u64>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("generate", vec![json!(nblocks), json!(maxtries)], id)
            .await
    }

    /// Mine blocks immediately to the given address.
    async fn generate_to_address(
        &self,
        nblocks: u64,
        address: &str,
        maxtries: Option<u64>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "generatetoaddress",
            vec![json!(nblocks), json!(address), json!(maxtries)],
            id,
        )
        .await
    }

    // ==========================================================================
    // Mining
    // ==========================================================================

    /// Block template for external mining software.
    async fn get_block_template(
        &self,
        template_request: Option<&Value>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("getblocktemplate", vec![json!(template_request)], id)
            .await
    }

    async fn get_mining_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getmininginfo", Vec::new(), id).await
    }

    /// Estimated network hashes per second. `nblocks` -1 averages since the
    /// last difficulty change.
    async fn get_network_hash_ps(
        &self,
        nblocks: Option<i64>,
        height: Option<i64>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "getnetworkhashps",
            vec![json!(nblocks), json!(height)],
            id,
        )
        .await
    }

    /// Raise or lower a transaction's mining priority by a fee delta in
    /// satoshis. The middle positional slot is a deprecated dummy the node
    /// requires to be null.
    async fn prioritise_transaction(
        &self,
        txid: &str,
        fee_delta: i64,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "prioritisetransaction",
            vec![json!(txid), Value::Null, json!(fee_delta)],
            id,
        )
        .await
    }

    /// Submit a serialized block to the network.
    async fn submit_block(&self, hex_data: &str, id: &str) -> Result<Value, Error> {
        self.call("submitblock", vec![json!(hex_data)], id).await
    }

    // ==========================================================================
    // Network
    // ==========================================================================

    /// Add, remove, or one-shot-connect a peer. `command` is `add`,
    /// `remove`, or `onetry`.
    async fn add_node(&self, node: &str, command: &str, id: &str) -> Result<Value, Error> {
        self.call("addnode", vec![json!(node), json!(command)], id)
            .await
    }

    async fn clear_banned(&self, id: &str) -> Result<Value, Error> {
        self.call("clearbanned", Vec::new(), id).await
    }

    async fn disconnect_node(&self, address: &str, id: &str) -> Result<Value, Error> {
        self.call("disconnectnode", vec![json!(address)], id).await
    }

    async fn get_added_node_info(&self, node: Option<&str>, id: &str) -> Result<Value, Error> {
        self.call("getaddednodeinfo", vec![json!(node)], id).await
    }

    /// Number of connections to other nodes.
    async fn get_connection_count(&self, id: &str) -> Result<Value, Error> {
        self.call("getconnectioncount", Vec::new(), id).await
    }

    async fn get_net_totals(&self, id: &str) -> Result<Value, Error> {
        self.call("getnettotals", Vec::new(), id).await
    }

    async fn get_network_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getnetworkinfo", Vec::new(), id).await
    }

    async fn get_peer_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getpeerinfo", Vec::new(), id).await
    }

    async fn list_banned(&self, id: &str) -> Result<Value, Error> {
        self.call("listbanned", Vec::new(), id).await
    }

    /// Request ping time measurement to all peers; results show up in
    /// `getpeerinfo`.
    async fn ping(&self, id: &str) -> Result<Value, Error> {
        self.call("ping", Vec::new(), id).await
    }

    /// Ban or unban a subnet. `command` is `add` or `remove`; `bantime` in
    /// seconds, or an absolute UNIX timestamp when `absolute` is set.
    async fn set_ban(
        &self,
        subnet: &str,
        command: &str,
        bantime: Option<i64>,
        absolute: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "setban",
            vec![
                json!(subnet),
                json!(command),
                json!(bantime),
                json!(absolute),
            ],
            id,
        )
        .await
    }

    /// Enable or disable all peer-to-peer network activity.
    async fn set_network_active(&self, state: bool, id: &str) -> Result<Value, Error> {
        self.call("setnetworkactive", vec![json!(state)], id).await
    }

    // ==========================================================================
    // Wallet
    // ==========================================================================

    /// Mark an unconfirmed wallet transaction as abandoned so its inputs
    /// can be respent.
    async fn abandon_transaction(&self, txid: &str, id: &str) -> Result<Value, Error> {
        self.call("abandontransaction", vec![json!(txid)], id).await
    }

    /// Add an n-of-m multisig address to the wallet.
    async fn add_multisig_address(
        &self,
        nrequired: u32,
        keys: &[&str],
        label: Option<&str>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "addmultisigaddress",
            vec![json!(nrequired), json!(keys), json!(label)],
            id,
        )
        .await
    }

    async fn add_witness_address(&self, address: &str, id: &str) -> Result<Value, Error> {
        self.call("addwitnessaddress", vec![json!(address)], id)
            .await
    }

    /// Safely copy the wallet file to the given destination.
    async fn backup_wallet(&self, destination: &str, id: &str) -> Result<Value, Error> {
        self.call("backupwallet", vec![json!(destination)], id).await
    }

    /// Replace an unconfirmed wallet transaction with one paying a higher
    /// fee. `options` is the node's options object (`conf_target`,
    /// `replaceable`, ...).
    async fn bump_fee(
        &self,
        txid: &str,
        options: Option<&Value>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("bumpfee", vec![json!(txid), json!(options)], id)
            .await
    }

    /// Private key for an address, in wallet-import format.
    async fn dump_priv_key(&self, address: &str, id: &str) -> Result<Value, Error> {
        self.call("dumpprivkey", vec![json!(address)], id).await
    }

    /// Dump all wallet keys to a server-side file in human-readable form.
    async fn dump_wallet(&self, filename: &str, id: &str) -> Result<Value, Error> {
        self.call("dumpwallet", vec![json!(filename)], id).await
    }

    /// Encrypt the wallet; the node restarts its wallet afterwards.
    async fn encrypt_wallet(&self, passphrase: &str, id: &str) -> Result<Value, Error> {
        self.call("encryptwallet", vec![json!(passphrase)], id).await
    }

    /// Total available balance. The first positional slot is the node's
    /// deprecated account dummy.
    async fn get_balance(
        &self,
        dummy: Option<&str>,
        minconf: Option<u64>,
        include_watchonly: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "getbalance",
            vec![json!(dummy), json!(minconf), json!(include_watchonly)],
            id,
        )
        .await
    }

    /// Fresh receiving address. `address_type` is `legacy`, `p2sh-segwit`,
    /// or `bech32`.
    async fn get_new_address(
        &self,
        label: Option<&str>,
        address_type: Option<&str>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "getnewaddress",
            vec![json!(label), json!(address_type)],
            id,
        )
        .await
    }

    /// Fresh change address, for raw transaction building.
    async fn get_raw_change_address(
        &self,
        address_type: Option<&str>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("getrawchangeaddress", vec![json!(address_type)], id)
            .await
    }

    async fn get_received_by_address(
        &self,
        address: &str,
        minconf: Option<u64>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "getreceivedbyaddress",
            vec![json!(address), json!(minconf)],
            id,
        )
        .await
    }

    /// Detailed information about an in-wallet transaction.
    async fn get_transaction(
        &self,
        txid: &str,
        include_watchonly: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "gettransaction",
            vec![json!(txid), json!(include_watchonly)],
            id,
        )
        .await
    }

    async fn get_unconfirmed_balance(&self, id: &str) -> Result<Value, Error> {
        self.call("getunconfirmedbalance", Vec::new(), id).await
    }

    async fn get_wallet_info(&self, id: &str) -> Result<Value, Error> {
        self.call("getwalletinfo", Vec::new(), id).await
    }

    /// Watch an address or script without its private key. A rescan can
    /// take a long time on a full chain.
    async fn import_address(
        &self,
        address_or_script: &str,
        label: Option<&str>,
        rescan: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "importaddress",
            vec![json!(address_or_script), json!(label), json!(rescan)],
            id,
        )
        .await
    }

    /// Import multiple addresses or scripts in one request. `requests` is
    /// the node's array of import descriptors.
    async fn import_multi(
        &self,
        requests: &[Value],
        options: Option<&Value>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("importmulti", vec![json!(requests), json!(options)], id)
            .await
    }

    /// Import funds into a pruned wallet given the raw transaction and its
    /// inclusion proof.
    async fn import_pruned_funds(
        &self,
        raw_transaction: &str,
        tx_out_proof: &str,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "importprunedfunds",
            vec![json!(raw_transaction), json!(tx_out_proof)],
            id,
        )
        .await
    }

    async fn import_priv_key(
        &self,
        privkey: &str,
        label: Option<&str>,
        rescan: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "importprivkey",
            vec![json!(privkey), json!(label), json!(rescan)],
            id,
        )
        .await
    }

    /// Import keys from a `dumpwallet` file on the server.
    async fn import_wallet(&self, filename: &str, id: &str) -> Result<Value, Error> {
        self.call("importwallet", vec![json!(filename)], id).await
    }

    async fn key_pool_refill(&self, new_size: Option<u64>, id: &str) -> Result<Value, Error> {
        self.call("keypoolrefill", vec![json!(new_size)], id).await
    }

    /// Addresses the wallet has observed being used together.
    async fn list_address_groupings(&self, id: &str) -> Result<Value, Error> {
        self.call("listaddressgroupings", Vec::new(), id).await
    }

    /// Outputs locked against spending via `lockunspent`.
    async fn list_lock_unspent(&self, id: &str) -> Result<Value, Error> {
        self.call("listlockunspent", Vec::new(), id).await
    }

    async fn list_received_by_address(
        &self,
        minconf: Option<u64>,
        include_empty: Option<bool>,
        include_watchonly: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "listreceivedbyaddress",
            vec![
                json!(minconf),
                json!(include_empty),
                json!(include_watchonly),
            ],
            id,
        )
        .await
    }

    /// Wallet transactions since (and not including) the given block.
    async fn list_since_block(
        &self,
        block_hash: Option<&str>,
        target_confirmations: Option<u64>,
        include_watchonly: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "listsinceblock",
            vec![
                json!(block_hash),
                json!(target_confirmations),
                json!(include_watchonly),
            ],
            id,
        )
        .await
    }

    /// Most recent wallet transactions, newest last. `skip` pages further
    /// back in history.
    async fn list_transactions(
        &self,
        label: Option<&str>,
        count: Option<u64>,
        skip: Option<u64>,
        include_watchonly: Option<bool>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "listtransactions",
            vec![
                json!(label),
                json!(count),
                json!(skip),
                json!(include_watchonly),
            ],
            id,
        )
        .await
    }

    /// Spendable outputs in the wallet, optionally filtered by address.
    async fn list_unspent(
        &self,
        minconf: Option<u64>,
        maxconf: Option<u64>,
        addresses: Option<&[&str]>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "listunspent",
            vec![json!(minconf), json!(maxconf), json!(addresses)],
            id,
        )
        .await
    }

    /// Lock (`unlock = false`) or unlock outputs against automatic coin
    /// selection. Each entry in `outputs` is a `{"txid", "vout"}` object;
    /// unlocking with no list releases everything.
    async fn lock_unspent(
        &self,
        unlock: bool,
        outputs: Option<&[Value]>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("lockunspent", vec![json!(unlock), json!(outputs)], id)
            .await
    }

    /// Forget funds previously added with `importprunedfunds`.
    async fn remove_pruned_funds(&self, txid: &str, id: &str) -> Result<Value, Error> {
        self.call("removeprunedfunds", vec![json!(txid)], id).await
    }

    /// Send to many recipients at once. `amounts` is an address-to-amount
    /// object; the first positional slot is the node's deprecated account
    /// dummy.
    async fn send_many(
        &self,
        dummy: &str,
        amounts: &Value,
        minconf: Option<u64>,
        comment: Option<&str>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "sendmany",
            vec![
                json!(dummy),
                json!(amounts),
                json!(minconf),
                json!(comment),
            ],
            id,
        )
        .await
    }

    /// Send an amount (in coin units, not satoshis) to an address.
    async fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: Option<&str>,
        comment_to: Option<&str>,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "sendtoaddress",
            vec![
                json!(address),
                json!(amount),
                json!(comment),
                json!(comment_to),
            ],
            id,
        )
        .await
    }

    /// Per-kilobyte fee rate for wallet transactions, in coin units.
    async fn set_tx_fee(&self, amount: f64, id: &str) -> Result<Value, Error> {
        self.call("settxfee", vec![json!(amount)], id).await
    }

    /// Sign a message with the private key of a wallet address.
    async fn sign_message(
        &self,
        address: &str,
        message: &str,
        id: &str,
    ) -> Result<Value, Error> {
        self.call("signmessage", vec![json!(address), json!(message)], id)
            .await
    }

    /// Sign a message with a bare private key.
    async fn sign_message_with_priv_key(
        &self,
        privkey: &str,
        message: &str,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "signmessagewithprivkey",
            vec![json!(privkey), json!(message)],
            id,
        )
        .await
    }

    /// Drop the decryption key from memory, locking the wallet.
    async fn wallet_lock(&self, id: &str) -> Result<Value, Error> {
        self.call("walletlock", Vec::new(), id).await
    }

    /// Unlock an encrypted wallet for `timeout` seconds.
    async fn wallet_passphrase(
        &self,
        passphrase: &str,
        timeout: u64,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "walletpassphrase",
            vec![json!(passphrase), json!(timeout)],
            id,
        )
        .await
    }

    async fn wallet_passphrase_change(
        &self,
        old_passphrase: &str,
        new_passphrase: &str,
        id: &str,
    ) -> Result<Value, Error> {
        self.call(
            "walletpassphrasechange",
            vec![json!(old_passphrase), json!(new_passphrase)],
            id,
        )
        .await
    }
}
