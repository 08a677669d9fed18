use futures_util::future::try_join;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::msg::MixnetQueryMsg;
use super::paging::collect_pages;
use super::QueryContext;
use crate::address::validate_address;
use crate::error::{Result, ValidatorClientError};
use crate::schema::parse_response;
use crate::types::{
    ContractStateParams, CurrentIntervalResponse, Delegation, GatewayBond,
    GatewayOwnershipResponse, IdentityKey, LayerDistribution, MixId, MixNodeBond,
    MixNodeDelegationResponse, MixNodeDetails, MixNodeRewarding, MixOwnershipResponse,
    MixnetContractVersion, MixnodeDetailsResponse, MixnodeOverview,
    MixnodeRewardingDetailsResponse, Page, PageCursor, RewardingParams, StakeSaturationResponse,
    UnbondedMixnode, UnbondedMixnodeEntry, UnbondedMixnodeResponse,
};

/// Client for the mixnet contract queries
#[derive(Clone)]
pub struct MixnetQueryClient {
    ctx: QueryContext,
    contract: String,
    address_prefix: String,
}

impl MixnetQueryClient {
    pub(crate) fn new(ctx: QueryContext, contract: String, address_prefix: String) -> Self {
        Self {
            ctx,
            contract,
            address_prefix,
        }
    }

    /// Get the contract address
    pub fn address(&self) -> &str {
        &self.contract
    }

    async fn query<T: DeserializeOwned>(&self, msg: MixnetQueryMsg) -> Result<T> {
        self.ctx.query(&self.contract, &msg).await
    }

    async fn query_raw(&self, msg: MixnetQueryMsg) -> Result<(String, Value)> {
        self.ctx.query_raw(&self.contract, &msg).await
    }

    async fn query_page<T: DeserializeOwned, K: PageCursor>(
        &self,
        msg: MixnetQueryMsg,
    ) -> Result<Page<T, K>> {
        self.query(msg).await
    }

    // ------------------------------------------------------------------------
    // Contract Settings
    // ------------------------------------------------------------------------

    pub async fn get_mixnet_contract_version(&self) -> Result<MixnetContractVersion> {
        self.query(MixnetQueryMsg::GetContractVersion {}).await
    }

    pub async fn get_state_params(&self) -> Result<ContractStateParams> {
        self.query(MixnetQueryMsg::GetStateParams {}).await
    }

    pub async fn get_rewarding_params(&self) -> Result<RewardingParams> {
        let (operation, raw) = self.query_raw(MixnetQueryMsg::GetRewardingParams {}).await?;
        let params: RewardingParams = parse_response(&operation, &raw)?;
        params.check().map_err(|e| e.into_client_error(&operation))?;
        Ok(params)
    }

    /// Number of active mixnodes per layer
    pub async fn get_layer_distribution(&self) -> Result<LayerDistribution> {
        self.query(MixnetQueryMsg::GetLayerDistribution {}).await
    }

    pub async fn get_current_interval(&self) -> Result<CurrentIntervalResponse> {
        self.query(MixnetQueryMsg::GetCurrentIntervalDetails {}).await
    }

    // ------------------------------------------------------------------------
    // Single Mixnode Lookups
    // ------------------------------------------------------------------------

    /// Stake saturation of a bonded mixnode. An unknown `mix_id` is `NotFound`,
    /// never a zero saturation.
    pub async fn get_stake_saturation(&self, mix_id: MixId) -> Result<StakeSaturationResponse> {
        let (operation, raw) = self
            .query_raw(MixnetQueryMsg::GetStakeSaturation { mix_id })
            .await?;
        StakeSaturationResponse::parse_optional(&raw)
            .map_err(|e| e.into_client_error(&operation))?
            .ok_or_else(|| ValidatorClientError::not_found(format!("mixnode {mix_id}")))
    }

    pub async fn get_mixnode_details(&self, mix_id: MixId) -> Result<MixNodeDetails> {
        let response: MixnodeDetailsResponse = self
            .query(MixnetQueryMsg::GetMixnodeDetails { mix_id })
            .await?;
        response
            .mixnode_details
            .ok_or_else(|| ValidatorClientError::not_found(format!("mixnode {mix_id}")))
    }

    pub async fn get_mixnode_rewarding_details(&self, mix_id: MixId) -> Result<MixNodeRewarding> {
        let response: MixnodeRewardingDetailsResponse = self
            .query(MixnetQueryMsg::GetMixnodeRewardingDetails { mix_id })
            .await?;
        response.rewarding_details.ok_or_else(|| {
            ValidatorClientError::not_found(format!("rewarding details of mixnode {mix_id}"))
        })
    }

    pub async fn get_unbonded_mixnode_information(&self, mix_id: MixId) -> Result<UnbondedMixnode> {
        let response: UnbondedMixnodeResponse = self
            .query(MixnetQueryMsg::GetUnbondedMixNodeInformation { mix_id })
            .await?;
        response
            .unbonded_info
            .ok_or_else(|| ValidatorClientError::not_found(format!("unbonded mixnode {mix_id}")))
    }

    /// Details and stake saturation of one mixnode, fetched concurrently.
    pub async fn get_mixnode_overview(&self, mix_id: MixId) -> Result<MixnodeOverview> {
        let (details, saturation) = try_join(
            self.get_mixnode_details(mix_id),
            self.get_stake_saturation(mix_id),
        )
        .await?;
        Ok(MixnodeOverview {
            details,
            saturation,
        })
    }

    // ------------------------------------------------------------------------
    // Ownership And Delegation Lookups
    // ------------------------------------------------------------------------

    /// Mixnode bonded by `address`. Owning nothing is a valid answer, hence `None`.
    pub async fn get_owned_mixnode(&self, address: &str) -> Result<Option<MixNodeDetails>> {
        validate_address(address, &self.address_prefix)?;
        let response: MixOwnershipResponse = self
            .query(MixnetQueryMsg::GetOwnedMixnode {
                address: address.to_string(),
            })
            .await?;
        Ok(response.mixnode_details)
    }

    /// Gateway bonded by `address`, `None` when it has none.
    pub async fn get_owned_gateway(&self, address: &str) -> Result<Option<GatewayBond>> {
        validate_address(address, &self.address_prefix)?;
        let response: GatewayOwnershipResponse = self
            .query(MixnetQueryMsg::GetOwnedGateway {
                address: address.to_string(),
            })
            .await?;
        Ok(response.gateway)
    }

    /// Delegation of `delegator` (optionally made through `proxy`) to mixnode `mix_id`.
    pub async fn get_delegation_details(
        &self,
        mix_id: MixId,
        delegator: &str,
        proxy: Option<&str>,
    ) -> Result<MixNodeDelegationResponse> {
        validate_address(delegator, &self.address_prefix)?;
        if let Some(proxy) = proxy {
            validate_address(proxy, &self.address_prefix)?;
        }

        let response: MixNodeDelegationResponse = self
            .query(MixnetQueryMsg::GetDelegationDetails {
                mix_id,
                delegator: delegator.to_string(),
                proxy: proxy.map(str::to_string),
            })
            .await?;
        if response.delegation.is_none() {
            return Err(ValidatorClientError::not_found(format!(
                "delegation of {delegator} to mixnode {mix_id}"
            )));
        }
        Ok(response)
    }

    // ------------------------------------------------------------------------
    // Paged Listings
    // ------------------------------------------------------------------------

    pub async fn get_mix_node_bonds_paged(
        &self,
        start_after: Option<MixId>,
    ) -> Result<Page<MixNodeBond, MixId>> {
        let msg = MixnetQueryMsg::GetMixNodeBonds {
            limit: self.ctx.page_limit(),
            start_after,
        };
        self.query_page(msg).await
    }

    pub async fn get_mix_nodes_detailed_paged(
        &self,
        start_after: Option<MixId>,
    ) -> Result<Page<MixNodeDetails, MixId>> {
        let msg = MixnetQueryMsg::GetMixNodesDetailed {
            limit: self.ctx.page_limit(),
            start_after,
        };
        self.query_page(msg).await
    }

    pub async fn get_unbonded_mix_nodes_paged(
        &self,
        start_after: Option<MixId>,
    ) -> Result<Page<UnbondedMixnodeEntry, MixId>> {
        let msg = MixnetQueryMsg::GetUnbondedMixNodes {
            limit: self.ctx.page_limit(),
            start_after,
        };
        self.query_page(msg).await
    }

    pub async fn get_gateways_paged(
        &self,
        start_after: Option<IdentityKey>,
    ) -> Result<Page<GatewayBond, IdentityKey>> {
        let msg = MixnetQueryMsg::GetGateways {
            start_after,
            limit: self.ctx.page_limit(),
        };
        self.query_page(msg).await
    }

    pub async fn get_mixnode_delegations_paged(
        &self,
        mix_id: MixId,
        start_after: Option<String>,
    ) -> Result<Page<Delegation, String>> {
        let msg = MixnetQueryMsg::GetMixnodeDelegations {
            mix_id,
            start_after,
            limit: self.ctx.page_limit(),
        };
        self.query_page(msg).await
    }

    pub async fn get_delegator_delegations_paged(
        &self,
        delegator: &str,
        start_after: Option<(MixId, String)>,
    ) -> Result<Page<Delegation, (MixId, String)>> {
        validate_address(delegator, &self.address_prefix)?;
        let msg = MixnetQueryMsg::GetDelegatorDelegations {
            delegator: delegator.to_string(),
            start_after,
            limit: self.ctx.page_limit(),
        };
        self.query_page(msg).await
    }

    pub async fn get_all_delegations_paged(
        &self,
        start_after: Option<(MixId, String)>,
    ) -> Result<Page<Delegation, (MixId, String)>> {
        let msg = MixnetQueryMsg::GetAllDelegations {
            start_after,
            limit: self.ctx.page_limit(),
        };
        self.query_page(msg).await
    }

    // ------------------------------------------------------------------------
    // Full Enumerations
    // ------------------------------------------------------------------------

    pub async fn get_all_mix_node_bonds(&self) -> Result<Vec<MixNodeBond>> {
        collect_pages("get_mix_node_bonds", |start_after| {
            self.get_mix_node_bonds_paged(start_after)
        })
        .await
    }

    pub async fn get_all_mix_nodes_detailed(&self) -> Result<Vec<MixNodeDetails>> {
        collect_pages("get_mix_nodes_detailed", |start_after| {
            self.get_mix_nodes_detailed_paged(start_after)
        })
        .await
    }

    pub async fn get_all_unbonded_mix_nodes(&self) -> Result<Vec<UnbondedMixnodeEntry>> {
        collect_pages("get_unbonded_mix_nodes", |start_after| {
            self.get_unbonded_mix_nodes_paged(start_after)
        })
        .await
    }

    pub async fn get_all_gateways(&self) -> Result<Vec<GatewayBond>> {
        collect_pages("get_gateways", |start_after| {
            self.get_gateways_paged(start_after)
        })
        .await
    }

    pub async fn get_all_mixnode_delegations(&self, mix_id: MixId) -> Result<Vec<Delegation>> {
        collect_pages("get_mixnode_delegations", |start_after| {
            self.get_mixnode_delegations_paged(mix_id, start_after)
        })
        .await
    }

    pub async fn get_all_delegator_delegations(&self, delegator: &str) -> Result<Vec<Delegation>> {
        collect_pages("get_delegator_delegations", |start_after| {
            self.get_delegator_delegations_paged(delegator, start_after)
        })
        .await
    }

    pub async fn get_all_network_delegations(&self) -> Result<Vec<Delegation>> {
        collect_pages("get_all_delegations", |start_after| {
            self.get_all_delegations_paged(start_after)
        })
        .await
    }
}
