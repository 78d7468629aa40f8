use crate::types::Code;

/// Declares a closed code table with an `Unrecognized` catch-all
///
/// Every table gets the same surface: `from_raw()` never fails, `raw()`
/// returns the code text, `description()` is `None` only for unrecognized
/// codes and `to_code()` turns a recognized entry into a [`Code`].
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $raw:literal => $description:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Unrecognized(String),
        }

        impl $name {
            pub fn from_raw(raw: &str) -> Self {
                match raw {
                    $($raw => $name::$variant,)+
                    other => $name::Unrecognized(other.to_string()),
                }
            }

            pub fn raw(&self) -> &str {
                match self {
                    $($name::$variant => $raw,)+
                    $name::Unrecognized(raw) => raw,
                }
            }

            pub fn description(&self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($description),)+
                    $name::Unrecognized(_) => None,
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }

            pub fn to_code(&self) -> Option<Code> {
                self.description().map(|description| Code::new(self.raw(), description))
            }
        }
    };
}

code_table! {
    /// NOTAM message type (the character after `NOTAM` in the header)
    NotamType {
        New = "N" => "New",
        Replace = "R" => "Replace",
        Cancel = "C" => "Cancel",
    }
}

code_table! {
    /// Q-code subject (second and third letters of the Q-code)
    Subject {
        // Lighting facilities
        ApproachLightingSystem = "LA" => "Approach lighting system",
        AerodromeBeacon = "LB" => "Aerodrome beacon",
        RunwayCentreLineLights = "LC" => "Runway centre line lights",
        LandingDirectionIndicatorLights = "LD" => "Landing direction indicator lights",
        RunwayEdgeLights = "LE" => "Runway edge lights",
        SequencedFlashingLights = "LF" => "Sequenced flashing lights",
        PilotControlledLighting = "LG" => "Pilot-controlled lighting",
        HighIntensityRunwayLights = "LH" => "High intensity runway lights",
        RunwayEndIdentifierLights = "LI" => "Runway end identifier lights",
        RunwayAlignmentIndicatorLights = "LJ" => "Runway alignment indicator lights",
        CategoryTwoApproachLighting = "LK" => "Category II components of approach lighting system",
        LowIntensityRunwayLights = "LL" => "Low intensity runway lights",
        MediumIntensityRunwayLights = "LM" => "Medium intensity runway lights",
        PrecisionApproachPathIndicator = "LP" => "Precision approach path indicator",
        AllLandingAreaLighting = "LR" => "All landing area lighting facilities",
        StopwayLights = "LS" => "Stopway lights",
        ThresholdLights = "LT" => "Threshold lights",
        HelicopterApproachPathIndicator = "LU" => "Helicopter approach path indicator",
        VisualApproachSlopeIndicator = "LV" => "Visual approach slope indicator system",
        HeliportLighting = "LW" => "Heliport lighting",
        TaxiwayCentreLineLights = "LX" => "Taxiway centre line lights",
        TaxiwayEdgeLights = "LY" => "Taxiway edge lights",
        RunwayTouchdownZoneLights = "LZ" => "Runway touchdown zone lights",
        // Movement and landing area
        MovementArea = "MA" => "Movement area",
        BearingStrength = "MB" => "Bearing strength",
        Clearway = "MC" => "Clearway",
        DeclaredDistances = "MD" => "Declared distances",
        TaxiingGuidanceSystem = "MG" => "Taxiing guidance system",
        RunwayArrestingGear = "MH" => "Runway arresting gear",
        ParkingArea = "MK" => "Parking area",
        DaylightMarkings = "MM" => "Daylight markings",
        Apron = "MN" => "Apron",
        Stopbar = "MO" => "Stopbar",
        AircraftStands = "MP" => "Aircraft stands",
        Runway = "MR" => "Runway",
        Stopway = "MS" => "Stopway",
        Threshold = "MT" => "Threshold",
        RunwayTurningBay = "MU" => "Runway turning bay",
        StripOrShoulder = "MW" => "Strip/shoulder",
        Taxiway = "MX" => "Taxiway(s)",
        RapidExitTaxiway = "MY" => "Rapid exit taxiway",
        // Facilities and services
        Aerodrome = "FA" => "Aerodrome",
        FrictionMeasuringDevice = "FB" => "Friction measuring device",
        CeilingMeasurementEquipment = "FC" => "Ceiling measurement equipment",
        DockingSystem = "FD" => "Docking system",
        Oxygen = "FE" => "Oxygen",
        FireFightingAndRescue = "FF" => "Fire fighting and rescue",
        GroundMovementControl = "FG" => "Ground movement control",
        HelicopterAlightingArea = "FH" => "Helicopter alighting area/platform",
        AircraftDeIcing = "FI" => "Aircraft de-icing",
        Oils = "FJ" => "Oils",
        LandingDirectionIndicator = "FL" => "Landing direction indicator",
        MeteorologicalService = "FM" => "Meteorological service",
        FogDispersalSystem = "FO" => "Fog dispersal system",
        Heliport = "FP" => "Heliport",
        SnowRemovalEquipment = "FS" => "Snow removal equipment",
        Transmissometer = "FT" => "Transmissometer",
        FuelAvailability = "FU" => "Fuel availability",
        WindDirectionIndicator = "FW" => "Wind direction indicator",
        CustomsAndImmigration = "FZ" => "Customs/immigration",
        // Communications and radar facilities
        AirGroundFacility = "CA" => "Air/ground facility",
        AdsB = "CB" => "Automatic dependent surveillance - broadcast",
        AdsC = "CC" => "Automatic dependent surveillance - contract",
        Cpdlc = "CD" => "Controller-pilot data link communications",
        EnRouteSurveillanceRadar = "CE" => "En route surveillance radar",
        GroundControlledApproach = "CG" => "Ground controlled approach system",
        SelectiveCallingSystem = "CL" => "Selective calling system",
        SurfaceMovementRadar = "CM" => "Surface movement radar",
        PrecisionApproachRadar = "CP" => "Precision approach radar",
        SurveillanceRadarElement = "CR" => "Surveillance radar element of precision approach radar system",
        SecondarySurveillanceRadar = "CS" => "Secondary surveillance radar",
        TerminalAreaSurveillanceRadar = "CT" => "Terminal area surveillance radar",
        // Instrument and microwave landing systems
        Ils = "IC" => "Instrument landing system",
        IlsDme = "ID" => "DME associated with ILS",
        IlsGlidePath = "IG" => "Glide path (ILS)",
        IlsInnerMarker = "II" => "Inner marker (ILS)",
        IlsLocalizer = "IL" => "Localizer (ILS)",
        IlsMiddleMarker = "IM" => "Middle marker (ILS)",
        Localizer = "IN" => "Localizer (not associated with ILS)",
        IlsOuterMarker = "IO" => "Outer marker (ILS)",
        IlsCategoryOne = "IS" => "ILS Category I",
        IlsCategoryTwo = "IT" => "ILS Category II",
        IlsCategoryThree = "IU" => "ILS Category III",
        Mls = "IW" => "Microwave landing system",
        OuterLocator = "IX" => "Locator, outer (ILS)",
        MiddleLocator = "IY" => "Locator, middle (ILS)",
        // GNSS services
        GnssAirfield = "GA" => "GNSS airfield-specific operations",
        GnssAreaWide = "GW" => "GNSS area-wide operations",
        // Terminal and en route navigation facilities
        AllRadioNavigationFacilities = "NA" => "All radio navigation facilities",
        NonDirectionalBeacon = "NB" => "Nondirectional radio beacon",
        Decca = "NC" => "DECCA",
        Dme = "ND" => "Distance measuring equipment",
        FanMarker = "NF" => "Fan marker",
        Locator = "NL" => "Locator",
        VorDme = "NM" => "VOR/DME",
        Tacan = "NN" => "TACAN",
        Omega = "NO" => "OMEGA",
        Vortac = "NT" => "VORTAC",
        Vor = "NV" => "VOR",
        DirectionFindingStation = "NX" => "Direction finding station",
        // Airspace organization
        MinimumAltitude = "AA" => "Minimum altitude",
        ControlZone = "AC" => "Control zone",
        AirDefenceIdentificationZone = "AD" => "Air defence identification zone",
        ControlArea = "AE" => "Control area",
        FlightInformationRegion = "AF" => "Flight information region",
        UpperControlArea = "AH" => "Upper control area",
        MinimumUsableFlightLevel = "AL" => "Minimum usable flight level",
        AreaNavigationRoute = "AN" => "Area navigation route",
        OceanicControlArea = "AO" => "Oceanic control area",
        ReportingPoint = "AP" => "Reporting point",
        AtsRoute = "AR" => "ATS route",
        TerminalControlArea = "AT" => "Terminal control area",
        UpperFlightInformationRegion = "AU" => "Upper flight information region",
        UpperAdvisoryArea = "AV" => "Upper advisory area",
        SignificantPoint = "AX" => "Significant point",
        AerodromeTrafficZone = "AZ" => "Aerodrome traffic zone",
        // Air traffic and VOLMET services
        Atis = "SA" => "Automatic terminal information service",
        AtsReportingOffice = "SB" => "ATS reporting office",
        AreaControlCentre = "SC" => "Area control centre",
        FlightInformationService = "SE" => "Flight information service",
        AerodromeFlightInformationService = "SF" => "Aerodrome flight information service",
        FlowControlCentre = "SL" => "Flow control centre",
        OceanicAreaControlCentre = "SO" => "Oceanic area control centre",
        ApproachControlService = "SP" => "Approach control service",
        FlightServiceStation = "SS" => "Flight service station",
        AerodromeControlTower = "ST" => "Aerodrome control tower",
        UpperAreaControlCentre = "SU" => "Upper area control centre",
        VolmetBroadcast = "SV" => "VOLMET broadcast",
        UpperAdvisoryService = "SY" => "Upper advisory service",
        // Air traffic procedures
        StandardInstrumentArrival = "PA" => "Standard instrument arrival",
        StandardVfrArrival = "PB" => "Standard VFR arrival",
        ContingencyProcedures = "PC" => "Contingency procedures",
        StandardInstrumentDeparture = "PD" => "Standard instrument departure",
        StandardVfrDeparture = "PE" => "Standard VFR departure",
        FlowControlProcedure = "PF" => "Flow control procedure",
        HoldingProcedure = "PH" => "Holding procedure",
        InstrumentApproachProcedure = "PI" => "Instrument approach procedure",
        VfrApproachProcedure = "PK" => "VFR approach procedure",
        FlightPlanProcessing = "PL" => "Flight plan processing",
        AerodromeOperatingMinima = "PM" => "Aerodrome operating minima",
        NoiseOperatingRestriction = "PN" => "Noise operating restriction",
        ObstacleClearance = "PO" => "Obstacle clearance altitude and height",
        RadioFailureProcedures = "PR" => "Radio failure procedures",
        TransitionAltitude = "PT" => "Transition altitude or transition level",
        MissedApproachProcedure = "PU" => "Missed approach procedure",
        MinimumHoldingAltitude = "PX" => "Minimum holding altitude",
        AdizProcedure = "PZ" => "ADIZ procedure",
        // Airspace restrictions
        AirspaceReservation = "RA" => "Airspace reservation",
        DangerArea = "RD" => "Danger area",
        MilitaryOperatingArea = "RM" => "Military operating area",
        Overflying = "RO" => "Overflying of",
        ProhibitedArea = "RP" => "Prohibited area",
        RestrictedArea = "RR" => "Restricted area",
        TemporaryRestrictedArea = "RT" => "Temporary restricted area",
        // Warnings
        AirDisplay = "WA" => "Air display",
        Aerobatics = "WB" => "Aerobatics",
        CaptiveBalloonOrKite = "WC" => "Captive balloon or kite",
        DemolitionOfExplosives = "WD" => "Demolition of explosives",
        Exercises = "WE" => "Exercises",
        AirRefuelling = "WF" => "Air refuelling",
        GliderFlying = "WG" => "Glider flying",
        Blasting = "WH" => "Blasting",
        BannerTowing = "WJ" => "Banner/target towing",
        FreeBalloonAscent = "WL" => "Ascent of free balloon",
        MissileGunOrRocketFiring = "WM" => "Missile, gun or rocket firing",
        ParachuteJumping = "WP" => "Parachute jumping exercise, paragliding or hang gliding",
        RadioactiveMaterials = "WR" => "Radioactive materials or toxic chemicals",
        BurningOrBlowingGas = "WS" => "Burning or blowing gas",
        MassMovementOfAircraft = "WT" => "Mass movement of aircraft",
        UnmannedAircraft = "WU" => "Unmanned aircraft",
        FormationFlight = "WV" => "Formation flight",
        VolcanicActivity = "WW" => "Significant volcanic activity",
        AerialSurvey = "WY" => "Aerial survey",
        ModelFlying = "WZ" => "Model flying",
        // Other information
        AeronauticalInformationService = "OA" => "Aeronautical information service",
        Obstacle = "OB" => "Obstacle",
        AircraftEntryRequirements = "OE" => "Aircraft entry requirements",
        ObstacleLights = "OL" => "Obstacle lights on",
        RescueCoordinationCentre = "OR" => "Rescue coordination centre",
        Unknown = "XX" => "Unknown",
    }
}

code_table! {
    /// Q-code condition (fourth and fifth letters of the Q-code)
    Condition {
        // Availability
        WithdrawnForMaintenance = "AC" => "Withdrawn for maintenance",
        AvailableForDaylight = "AD" => "Available for daylight operation",
        FlightChecked = "AF" => "Flight checked and found reliable",
        GroundCheckedOnly = "AG" => "Operating but ground checked only, awaiting flight check",
        HoursOfServiceChanged = "AH" => "Hours of service are now",
        ResumedNormalOperation = "AK" => "Resumed normal operation",
        OperativeSubjectToLimitations = "AL" => "Operative subject to previously published limitations/conditions",
        MilitaryOperationsOnly = "AM" => "Military operations only",
        AvailableForNight = "AN" => "Available for night operation",
        Operational = "AO" => "Operational",
        PriorPermissionRequired = "AP" => "Available, prior permission required",
        AvailableOnRequest = "AR" => "Available on request",
        Unserviceable = "AS" => "Unserviceable",
        NotAvailable = "AU" => "Not available",
        CompletelyWithdrawn = "AW" => "Completely withdrawn",
        ShutdownCancelled = "AX" => "Previously promulgated shutdown has been cancelled",
        // Changes
        Activated = "CA" => "Activated",
        Completed = "CC" => "Completed",
        Deactivated = "CD" => "Deactivated",
        Erected = "CE" => "Erected",
        FrequencyChanged = "CF" => "Operating frequency(ies) changed to",
        DowngradedTo = "CG" => "Downgraded to",
        Changed = "CH" => "Changed",
        IdentificationChanged = "CI" => "Identification or radio call sign changed to",
        Realigned = "CL" => "Realigned",
        Displaced = "CM" => "Displaced",
        Cancelled = "CN" => "Cancelled",
        Operating = "CO" => "Operating",
        ReducedPower = "CP" => "Operating on reduced power",
        TemporarilyReplaced = "CR" => "Temporarily replaced by",
        Installed = "CS" => "Installed",
        OnTest = "CT" => "On test, do not use",
        // Hazard conditions
        BrakingAction = "HA" => "Braking action is",
        FrictionCoefficient = "HB" => "Friction coefficient is",
        CompactedSnow = "HC" => "Covered by compacted snow to depth of",
        DrySnow = "HD" => "Covered by dry snow to a depth of",
        Water = "HE" => "Covered by water to a depth of",
        FreeOfSnowAndIce = "HF" => "Totally free of snow and ice",
        GrassCutting = "HG" => "Grass cutting in progress",
        HazardDueTo = "HH" => "Hazard due to",
        Ice = "HI" => "Covered by ice",
        LaunchPlanned = "HJ" => "Launch planned",
        BirdMigration = "HK" => "Bird migration in progress",
        SnowClearanceCompleted = "HL" => "Snow clearance completed",
        MarkedBy = "HM" => "Marked by",
        WetSnowOrSlush = "HN" => "Covered by wet snow or slush to a depth of",
        ObscuredBySnow = "HO" => "Obscured by snow",
        SnowClearanceInProgress = "HP" => "Snow clearance in progress",
        OperationCancelled = "HQ" => "Operation cancelled",
        StandingWater = "HR" => "Standing water",
        SandingInProgress = "HS" => "Sanding in progress",
        SignalAreaApproachOnly = "HT" => "Approach according to signal area only",
        LaunchInProgress = "HU" => "Launch in progress",
        WorkCompleted = "HV" => "Work completed",
        WorkInProgress = "HW" => "Work in progress",
        ConcentrationOfBirds = "HX" => "Concentration of birds",
        SnowBanks = "HY" => "Snow banks exist",
        FrozenRutsAndRidges = "HZ" => "Covered by frozen ruts and ridges",
        // Limitations
        AuxiliaryPower = "LA" => "Operating on auxiliary power supply",
        ReservedForBasedAircraft = "LB" => "Reserved for aircraft based therein",
        Closed = "LC" => "Closed",
        Unsafe = "LD" => "Unsafe",
        WithoutAuxiliaryPower = "LE" => "Operating without auxiliary power supply",
        InterferenceFrom = "LF" => "Interference from",
        WithoutIdentification = "LG" => "Operating without identification",
        UnserviceableForHeavyAircraft = "LH" => "Unserviceable for aircraft heavier than",
        ClosedToIfr = "LI" => "Closed to IFR operations",
        FixedLight = "LK" => "Operating as a fixed light",
        UsableLengthAndWidth = "LL" => "Usable for length of and width of",
        ClosedToNight = "LN" => "Closed to all night operations",
        ProhibitedTo = "LP" => "Prohibited to",
        RestrictedToRunwaysAndTaxiways = "LR" => "Aircraft restricted to runways and taxiways",
        SubjectToInterruption = "LS" => "Subject to interruption",
        LimitedTo = "LT" => "Limited to",
        ClosedToVfr = "LV" => "Closed to VFR operations",
        WillTakePlace = "LW" => "Will take place",
        CautionAdvised = "LX" => "Operating but caution advised due to",
        Unknown = "XX" => "Unknown",
    }
}

code_table! {
    /// Traffic the NOTAM is relevant to
    Traffic {
        Ifr = "I" => "IFR",
        Vfr = "V" => "VFR",
        IfrAndVfr = "IV" => "IFR and VFR",
        Checklist = "K" => "Checklist",
    }
}

code_table! {
    /// Purpose of the NOTAM, one per character of the purpose group
    Purpose {
        Immediate = "N" => "Immediate",
        Briefing = "B" => "Briefing",
        FlightOperations = "O" => "Flight Operations",
        Miscellaneous = "M" => "Miscellaneous",
        Checklist = "K" => "Checklist",
    }
}

code_table! {
    /// Scope of the NOTAM, one per character of the scope group
    Scope {
        Aerodrome = "A" => "Aerodrome",
        EnRoute = "E" => "En-route",
        Warning = "W" => "Warning",
        Checklist = "K" => "Checklist",
    }
}
