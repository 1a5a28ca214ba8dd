// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod conflict;
mod properties;
mod recurrence;
mod store;
mod wire;
